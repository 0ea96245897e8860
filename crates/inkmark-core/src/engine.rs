//! The transform engine and its per-call session.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::escape::unescape;
use crate::normalize::normalize;
use crate::options::Options;
use crate::pattern::{self, TAB_WIDTH};
use crate::spans::encode_amps_and_angles;

/// Markdown-to-HTML engine.
///
/// Converts text written in the classic Markdown dialect into structurally
/// valid XHTML (or HTML, depending on [`Options::empty_element_suffix`])
/// through an ordered sequence of pattern-based rewrites.
///
/// All per-call state lives in a session created inside [`transform`], so a
/// single engine can serve concurrent calls through `&self`.
///
/// [`transform`]: Markdown::transform
///
/// # Example
///
/// ```
/// use inkmark_core::Markdown;
///
/// let engine = Markdown::new();
/// assert_eq!(engine.transform("**bold**"), "<p><strong>bold</strong></p>\n");
/// ```
#[derive(Debug, Clone)]
pub struct Markdown {
    options: Options,
}

impl Markdown {
    /// Create an engine with default [`Options`].
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create an engine with explicit [`Options`].
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Transform Markdown-formatted text to HTML.
    ///
    /// Empty input yields empty output; any other input yields output ending
    /// in exactly one newline. Malformed markup is never an error: constructs
    /// that fail to parse pass through as literal text.
    #[must_use]
    pub fn transform(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut session = Transform::new(&self.options);

        // The order here is essential: link and image substitutions must see
        // the side tables populated, and raw HTML must be hidden before any
        // block pass can touch it.
        let mut text = normalize(text);
        text = session.hash_html_blocks(&text);
        text = session.strip_link_definitions(&text);
        text = session.run_block_gamut(&text, true);
        text = unescape(&text);

        text.push('\n');
        text
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable state scoped to one `transform` call, threaded by `&mut` through
/// the block gamut, list processor and blockquote evaluator.
pub(crate) struct Transform<'a> {
    pub(crate) options: &'a Options,
    /// link id → url, from reference definitions
    pub(crate) urls: HashMap<String, String>,
    /// link id → title, from reference definitions
    pub(crate) titles: HashMap<String, String>,
    /// hash token → hidden HTML fragment
    pub(crate) html_blocks: HashMap<String, String>,
    /// current list nesting depth; zero means not inside a list
    pub(crate) list_level: u32,
}

impl<'a> Transform<'a> {
    pub(crate) fn new(options: &'a Options) -> Self {
        Self {
            options,
            urls: HashMap::new(),
            titles: HashMap::new(),
            html_blocks: HashMap::new(),
            list_level: 0,
        }
    }
}

static LINK_DEF: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let lt = TAB_WIDTH - 1;
    let pattern = format!(
        "(?m)^[ ]{{0,{lt}}}\\[([^\\[\\]]+)\\]:\
         [ ]*\\n?[ ]*\
         <?(\\S+?)>?\
         [ ]*\\n?[ ]*\
         (?:(?<=\\s)[\"(](.+?)[\")][ ]*)?\
         (?:\\n+|\\z)"
    );
    fancy_regex::Regex::new(&pattern).expect("link definition pattern must compile")
});

impl Transform<'_> {
    /// Strip link definitions (`[id]: url "optional title"`) from the text
    /// and record them in the session's side tables.
    ///
    /// Ids are stored raw; resolution lowercases the candidate id instead.
    pub(crate) fn strip_link_definitions(&mut self, text: &str) -> String {
        pattern::replace_all(&LINK_DEF, text, |caps| {
            let id = pattern::group(caps, 1);
            let url = pattern::group(caps, 2);
            self.urls.insert(id.to_owned(), encode_amps_and_angles(url));

            let title = pattern::group(caps, 3);
            if !title.is_empty() {
                // `&quot` without the trailing semicolon is a long-standing
                // quirk of the reference implementation, kept for bit-exact
                // compatibility with existing rendered corpora.
                self.titles.insert(id.to_owned(), title.replace('"', "&quot"));
            }

            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn transform(text: &str) -> String {
        Markdown::new().transform(text)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform(""), "");
    }

    #[test]
    fn test_output_ends_in_single_newline() {
        let out = transform("hello");
        assert!(out.ends_with('\n'));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_default_options_identical_to_explicit() {
        let implicit = Markdown::new();
        let explicit = Markdown::with_options(Options::default());
        for input in ["# Title\n\nBody *em*", "- a\n- b", "> quote"] {
            assert_eq!(implicit.transform(input), explicit.transform(input));
        }
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            transform("This is **bold**. This is also __bold__."),
            "<p>This is <strong>bold</strong>. This is also <strong>bold</strong>.</p>\n"
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            transform("This is *italic*. This is also _italic_."),
            "<p>This is <em>italic</em>. This is also <em>italic</em>.</p>\n"
        );
    }

    #[test]
    fn test_reference_link() {
        assert_eq!(
            transform("This is [a link][1].\n\n  [1]: http://www.example.com"),
            "<p>This is <a href=\"http://www.example.com\">a link</a>.</p>\n"
        );
    }

    #[test]
    fn test_reference_ids_are_case_insensitive() {
        assert_eq!(
            transform("[a link][ID]\n\n  [id]: http://example.com"),
            "<p><a href=\"http://example.com\">a link</a></p>\n"
        );
    }

    #[test]
    fn test_unresolved_reference_passes_through() {
        assert_eq!(
            transform("[a link][missing]"),
            "<p>[a link][missing]</p>\n"
        );
    }

    #[test]
    fn test_angle_bracket_autolink() {
        assert_eq!(
            transform("Have you visited <http://www.example.com> before?"),
            "<p>Have you visited <a href=\"http://www.example.com\">http://www.example.com</a> before?</p>\n"
        );
    }

    #[test]
    fn test_bare_url_left_alone_by_default() {
        assert_eq!(
            transform("Have you visited http://www.example.com before?"),
            "<p>Have you visited http://www.example.com before?</p>\n"
        );
    }

    #[test]
    fn test_inline_link() {
        assert_eq!(
            transform("Have you visited [example](http://www.example.com) before?"),
            "<p>Have you visited <a href=\"http://www.example.com\">example</a> before?</p>\n"
        );
    }

    #[test]
    fn test_inline_link_with_title() {
        assert_eq!(
            transform("[example](http://example.com \"An example\")"),
            "<p><a href=\"http://example.com\" title=\"An example\">example</a></p>\n"
        );
    }

    #[test]
    fn test_reference_image() {
        assert_eq!(
            transform(
                "An image goes here: ![alt text][1]\n\n  [1]: http://www.google.com/intl/en_ALL/images/logo.gif"
            ),
            "<p>An image goes here: <img src=\"http://www.google.com/intl/en_ALL/images/logo.gif\" alt=\"alt text\" /></p>\n"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            transform("Here is a quote\n\n> Sample blockquote\n"),
            "<p>Here is a quote</p>\n\n<blockquote>\n  <p>Sample blockquote</p>\n</blockquote>\n"
        );
    }

    #[test]
    fn test_numbered_list() {
        assert_eq!(
            transform("A numbered list:\n\n1. a\n2. b\n3. c\n"),
            "<p>A numbered list:</p>\n\n<ol>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_bulleted_list() {
        assert_eq!(
            transform("A bulleted list:\n\n- a\n- b\n- c\n"),
            "<p>A bulleted list:</p>\n\n<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_header_level_1() {
        assert_eq!(
            transform("#Header 1\nHeader 1\n========"),
            "<h1>Header 1</h1>\n\n<h1>Header 1</h1>\n"
        );
    }

    #[test]
    fn test_header_level_2() {
        assert_eq!(
            transform("##Header 2\nHeader 2\n--------"),
            "<h2>Header 2</h2>\n\n<h2>Header 2</h2>\n"
        );
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            transform("code sample:\n\n    <head>\n    <title>page title</title>\n    </head>\n"),
            "<p>code sample:</p>\n\n<pre><code>&lt;head&gt;\n&lt;title&gt;page title&lt;/title&gt;\n&lt;/head&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_code_span() {
        assert_eq!(
            transform("HTML contains the `<blink>` tag"),
            "<p>HTML contains the <code>&lt;blink&gt;</code> tag</p>\n"
        );
    }

    #[test]
    fn test_html_passthrough() {
        assert_eq!(
            transform("<div>\nHello World!\n</div>\n"),
            "<div>\nHello World!\n</div>\n"
        );
    }

    #[test]
    fn test_backslash_escapes_render_literal() {
        assert_eq!(transform("\\`foo\\`"), "<p>`foo`</p>\n");
    }

    #[test]
    fn test_backslash_escape_round_trip_all_metacharacters() {
        for c in crate::escape::ESCAPE_CHARS.chars() {
            let out = transform(&format!("\\{c}"));
            assert!(
                out.contains(c),
                "escaped {c:?} should render literally, got {out:?}"
            );
        }
    }

    #[test]
    fn test_horizontal_rules() {
        assert_eq!(
            transform("* * *\n\n***\n\n*****\n\n- - -\n\n---------------------------------------\n\n"),
            "<hr />\n\n<hr />\n\n<hr />\n\n<hr />\n\n<hr />\n"
        );
    }

    #[test]
    fn test_normalize_cr() {
        assert_eq!(
            transform("# Header\r\rBody"),
            "<h1>Header</h1>\n\n<p>Body</p>\n"
        );
    }

    #[test]
    fn test_normalize_crlf() {
        assert_eq!(
            transform("# Header\r\n\r\nBody"),
            "<h1>Header</h1>\n\n<p>Body</p>\n"
        );
    }

    #[test]
    fn test_normalize_lf() {
        assert_eq!(
            transform("# Header\n\nBody"),
            "<h1>Header</h1>\n\n<p>Body</p>\n"
        );
    }

    #[test]
    fn test_line_ending_outputs_identical() {
        let lf = transform("a\n\nb\n");
        assert_eq!(lf, transform("a\r\n\r\nb\r\n"));
        assert_eq!(lf, transform("a\r\rb\r"));
    }

    #[test]
    fn test_loose_list_propagates_forward() {
        // the blank line after the first item makes the second loose too,
        // even though it would be tight on its own
        assert_eq!(
            transform("- a\n\n- b\n"),
            "<ul>\n<li><p>a</p></li>\n<li><p>b</p></li>\n</ul>\n"
        );
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            transform("- a\n    - b\n- c\n"),
            "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul></li>\n<li>c</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_link_definition_not_rendered() {
        let out = transform("[a link][1]\n\n  [1]: http://example.com");
        assert!(!out.contains("[1]:"));
        assert!(out.contains("<a href=\"http://example.com\">a link</a>"));
    }

    #[test]
    fn test_link_definition_title_keeps_quot_quirk() {
        let out = transform("[x][1]\n\n  [1]: http://example.com \"say \"hi\"\"");
        // embedded quotes become `&quot` without a trailing semicolon
        assert!(out.contains("&quot"), "got {out:?}");
        assert!(!out.contains("&quot;"), "got {out:?}");
    }

    #[test]
    fn test_auto_hyperlink_toggle() {
        assert_eq!(
            transform("foo http://example.com bar"),
            "<p>foo http://example.com bar</p>\n"
        );
        let engine = Markdown::with_options(Options {
            auto_hyperlink: true,
            ..Options::default()
        });
        assert_eq!(
            engine.transform("foo http://example.com bar"),
            "<p>foo <a href=\"http://example.com\">http://example.com</a> bar</p>\n"
        );
        // angle-bracketed URLs link regardless of the flag
        assert_eq!(
            transform("<http://example.com>"),
            "<p><a href=\"http://example.com\">http://example.com</a></p>\n"
        );
    }

    #[test]
    fn test_auto_newlines_toggle() {
        assert_eq!(transform("Line1\nLine2"), "<p>Line1\nLine2</p>\n");
        let engine = Markdown::with_options(Options {
            auto_newlines: true,
            ..Options::default()
        });
        assert_eq!(
            engine.transform("Line1\nLine2"),
            "<p>Line1<br />\nLine2</p>\n"
        );
    }

    #[test]
    fn test_empty_element_suffix() {
        assert_eq!(transform("* * *"), "<hr />\n");
        let engine = Markdown::with_options(Options {
            empty_element_suffix: ">".to_owned(),
            ..Options::default()
        });
        assert_eq!(engine.transform("* * *"), "<hr>\n");
    }

    #[test]
    fn test_encode_problem_url_characters_toggle() {
        assert_eq!(
            transform("[Foo](/'*_[]()/)"),
            "<p><a href=\"/'*_[]()/\">Foo</a></p>\n"
        );
        let engine = Markdown::with_options(Options {
            encode_problem_url_characters: true,
            ..Options::default()
        });
        assert_eq!(
            engine.transform("[Foo](/'*_[]()/)"),
            "<p><a href=\"/%27%2a_%5b%5d%28%29/\">Foo</a></p>\n"
        );
    }

    #[test]
    fn test_link_emails_toggle() {
        let linked = transform("<aa@bb.com>");
        assert!(linked.starts_with("<p><a href=\""), "got {linked:?}");
        assert!(linked.contains("&#"), "got {linked:?}");

        let engine = Markdown::with_options(Options {
            link_emails: false,
            ..Options::default()
        });
        assert_eq!(engine.transform("<aa@bb.com>"), "<p><aa@bb.com></p>\n");
    }

    #[test]
    fn test_strict_bold_italic_toggle() {
        assert_eq!(
            transform("before**bold**after before_italic_after"),
            "<p>before<strong>bold</strong>after before<em>italic</em>after</p>\n"
        );
        let engine = Markdown::with_options(Options {
            strict_bold_italic: true,
            ..Options::default()
        });
        assert_eq!(
            engine.transform("before*bold*after before_italic_after"),
            "<p>before*bold*after before_italic_after</p>\n"
        );
    }

    #[test]
    fn test_concurrent_transforms_share_one_engine() {
        let engine = std::sync::Arc::new(Markdown::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || engine.transform("# Title\n\n- a\n- b\n\n**bold**"))
            })
            .collect();
        let first = engine.transform("# Title\n\n- a\n- b\n\n**bold**");
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first);
        }
    }
}
