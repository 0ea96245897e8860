//! Escape-table bookkeeping.
//!
//! Markdown metacharacters that must survive the rewrite passes literally
//! are swapped for opaque placeholder tokens and restored in a final pass.
//! The table is a process-wide immutable bijection built once on first use;
//! token text starts with a control character (`\u{1A}`) that cannot occur
//! in normalized document text, so tokens never collide with content.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;

/// Characters with Markdown meaning that participate in escaping.
pub(crate) const ESCAPE_CHARS: &str = r"\`*_{}[]()>#+-.!/";

/// Compute the placeholder key for a fragment: `\u{1A}H<hash>H` for hidden
/// HTML blocks, `\u{1A}E<hash>E` for escaped characters. The key is a pure
/// function of the fragment text, so identical fragments share one key.
pub(crate) fn hash_key(text: &str, html_block: bool) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let delim = if html_block { 'H' } else { 'E' };
    format!("\u{1A}{delim}{}{delim}", hasher.finish())
}

/// The escape table and its derived forms.
pub(crate) struct EscapeTable {
    /// metacharacter → token
    forward: HashMap<char, String>,
    /// token → metacharacter
    inverted: HashMap<String, String>,
    /// `\` + metacharacter → token
    backslash: HashMap<String, String>,
    /// Alternation over every backslash-escaped form.
    pub(crate) backslash_pattern: Regex,
}

impl EscapeTable {
    fn build() -> Self {
        let mut forward = HashMap::new();
        let mut inverted = HashMap::new();
        let mut backslash = HashMap::new();
        let mut backslash_pattern = String::new();

        for c in ESCAPE_CHARS.chars() {
            let token = hash_key(&c.to_string(), false);
            forward.insert(c, token.clone());
            inverted.insert(token.clone(), c.to_string());
            backslash.insert(format!("\\{c}"), token);
            if !backslash_pattern.is_empty() {
                backslash_pattern.push('|');
            }
            backslash_pattern.push_str(&regex::escape(&format!("\\{c}")));
        }

        let backslash_pattern =
            Regex::new(&backslash_pattern).expect("backslash escape pattern must compile");
        Self {
            forward,
            inverted,
            backslash,
            backslash_pattern,
        }
    }

    /// Token for a metacharacter in the escape set (empty for any other
    /// character; callers only pass set members).
    pub(crate) fn token(&self, c: char) -> &str {
        self.forward.get(&c).map_or("", String::as_str)
    }
}

pub(crate) static ESCAPE_TABLE: LazyLock<EscapeTable> = LazyLock::new(EscapeTable::build);

static UNESCAPES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{1A}E\\d+E").expect("unescape pattern must compile"));

/// Swap every escape token back to its literal character.
///
/// This is the last text-mutating step of a transform.
pub(crate) fn unescape(text: &str) -> String {
    UNESCAPES
        .replace_all(text, |caps: &regex::Captures<'_>| {
            ESCAPE_TABLE
                .inverted
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

/// Replace backslash-escaped metacharacters (`\*`, `` \` `` …) with their
/// tokens so the span passes never see them.
pub(crate) fn escape_backslashes(text: &str) -> String {
    ESCAPE_TABLE
        .backslash_pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            ESCAPE_TABLE
                .backslash
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

static CODE_ENCODER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&|<|>|\\|\*|_|\{|\}|\[|\]").expect("code encoder pattern must compile")
});

/// Encode characters that are literals inside code blocks and code spans.
///
/// `&`, `<` and `>` become entities directly; characters that are magic in
/// Markdown route through the escape table instead so later passes skip them.
pub(crate) fn encode_code(code: &str) -> String {
    CODE_ENCODER
        .replace_all(code, |caps: &regex::Captures<'_>| match &caps[0] {
            // HTML entities are not entities within a code span
            "&" => "&amp;".to_owned(),
            "<" => "&lt;".to_owned(),
            ">" => "&gt;".to_owned(),
            other => other
                .chars()
                .next()
                .map_or_else(String::new, |c| ESCAPE_TABLE.token(c).to_owned()),
        })
        .into_owned()
}

/// Escape `*` and `_` (in URLs and titles) so emphasis never fires inside
/// generated attributes.
pub(crate) fn escape_bold_italic(text: &str) -> String {
    text.replace('*', ESCAPE_TABLE.token('*'))
        .replace('_', ESCAPE_TABLE.token('_'))
}

/// Entity-encode the characters that would break out of an HTML attribute.
pub(crate) fn attribute_encode(text: &str) -> String {
    text.replace('>', "&gt;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}
