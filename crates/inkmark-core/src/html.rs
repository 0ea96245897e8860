//! Raw HTML protection.
//!
//! Block-level HTML in the source (and block markup the engine has just
//! generated) is swapped for placeholder tokens so the later passes never
//! re-wrap or re-escape it. The matcher is derived from the classic
//! PHP-Markdown block pattern: a fixed allow-list of block tags with
//! nesting support up to a fixed depth, plus standalone `<hr>`, HTML
//! comments, and processing instructions.

use std::sync::LazyLock;

use crate::engine::Transform;
use crate::escape::hash_key;
use crate::pattern::{self, NEST_DEPTH, TAB_WIDTH};

/// Tags treated as block-level only when the start tag is alone on its line;
/// otherwise they stay inline and get wrapped in `<p>` like any other span.
const BLOCK_TAGS_A: &str = "ins|del";

/// Tags that are always block-level.
const BLOCK_TAGS_B: &str =
    "p|div|h[1-6]|blockquote|pre|table|dl|ol|ul|address|script|noscript|form|fieldset|iframe|math";

/// Optional tag attributes: atomic so quote handling never backtracks.
const ATTR: &str = r#"(?>\s(?>[^>"/]+|/+(?!>)|"[^"]*"|'[^']*')*)?"#;

fn block_pattern() -> String {
    // Content of a block tag, supporting same-name nesting up to NEST_DEPTH.
    // `\2` is the tag name captured by the caller.
    let content = format!(
        "{}.*?{}",
        format!(r"(?>[^<]+|<\2{ATTR}(?>/>|>").repeat(NEST_DEPTH),
        r"</\2\s*>)|<(?!/\2\s*>))*".repeat(NEST_DEPTH)
    );
    // Same, for the group-a alternative where the tag name lands in \3.
    let content2 = content.replace(r"\2", r"\3");
    let lt = TAB_WIDTH - 1;

    format!(
        "(?>(?>(?<=\\n)|\\A\\n?)\
         (\
         <({BLOCK_TAGS_B}){ATTR}>{content}</\\2>[ ]*(?=\\n+|\\z)\
         |\
         <({BLOCK_TAGS_A}){ATTR}>[ ]*\\n{content2}</\\3>[ ]*(?=\\n+|\\z)\
         |\
         [ ]{{0,{lt}}}<hr{ATTR}/?>[ ]*(?=\\n{{2,}}|\\z)\
         |\
         (?:(?<=\\n\\n)|\\A)[ ]{{0,{lt}}}(?s:<!--(?:|(?:[^>-]|-[^>])(?:[^-]|-[^-])*)-->)[ ]*(?=\\n{{2,}}|\\z)\
         |\
         [ ]{{0,{lt}}}(?s:<([?%]).*?\\4>)[ ]*(?=\\n{{2,}}|\\z)\
         ))"
    )
}

static BLOCKS_HTML: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(&block_pattern()).expect("block HTML pattern must compile")
});

impl Transform<'_> {
    /// Replace block-level HTML with hash tokens, recording each fragment in
    /// the session table. Runs once on the raw source and once more after the
    /// block passes to shield freshly generated markup from `<p>` wrapping.
    pub(crate) fn hash_html_blocks(&mut self, text: &str) -> String {
        pattern::replace_all(&BLOCKS_HTML, text, |caps| {
            let fragment = pattern::group(caps, 1);
            let key = hash_key(fragment, true);
            self.html_blocks.insert(key.clone(), fragment.to_owned());
            format!("\n\n{key}\n\n")
        })
    }
}

/// One token of an HTML-ish document: a tag (possibly with nested tags, as
/// in `<a href="<MTFoo>">`) or a run of text between tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    Tag(&'a str),
}

static HTML_TOKENS: LazyLock<regex::Regex> = LazyLock::new(|| {
    // derived from the _tokenize() subroutine in Brad Choate's MTRegex plugin
    let nested_tag = format!(
        "{}{}",
        "(?:<[A-Za-z/!$](?:[^<>]|".repeat(NEST_DEPTH),
        ")*>)".repeat(NEST_DEPTH)
    );
    let pattern = format!(
        r"(?s)<!--(?:|(?:[^>-]|-[^>])(?:[^-]|-[^-])*)-->|<\?.*?\?>|{nested_tag}"
    );
    regex::Regex::new(&pattern).expect("HTML token pattern must compile")
});

/// Split text into tag and text tokens.
pub(crate) fn tokenize_html(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    for m in HTML_TOKENS.find_iter(text) {
        if pos < m.start() {
            tokens.push(Token::Text(&text[pos..m.start()]));
        }
        tokens.push(Token::Tag(m.as_str()));
        pos = m.end();
    }
    if pos < text.len() {
        tokens.push(Token::Text(&text[pos..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_pattern_compiles() {
        LazyLock::force(&BLOCKS_HTML);
        LazyLock::force(&HTML_TOKENS);
    }

    #[test]
    fn test_tokenize_text_and_tags() {
        let tokens = tokenize_html("pre <b>bold</b> post");
        assert_eq!(
            tokens,
            vec![
                Token::Text("pre "),
                Token::Tag("<b>"),
                Token::Text("bold"),
                Token::Tag("</b>"),
                Token::Text(" post"),
            ]
        );
    }

    #[test]
    fn test_tokenize_nested_tag() {
        let tokens = tokenize_html(r#"<a href="<MTFoo>">x</a>"#);
        assert_eq!(tokens[0], Token::Tag(r#"<a href="<MTFoo>">"#));
        assert_eq!(tokens[1], Token::Text("x"));
    }

    #[test]
    fn test_tokenize_comment() {
        let tokens = tokenize_html("a <!-- note --> b");
        assert_eq!(tokens[1], Token::Tag("<!-- note -->"));
    }
}
