//! Pattern support for the rewrite passes.
//!
//! Two engines are in play: linear-time [`regex`] for every rewrite that
//! needs no backtracking features (those call `Regex::replace_all` at the
//! call site), and [`fancy_regex`] for the rewrites that need atomic groups,
//! backreferences or look-around. The fancy passes all go through
//! [`replace_all`], which performs a single ordered replace-with-evaluator
//! sweep and degrades to best-effort output if the backtracking engine
//! reports a fault mid-pass.

use std::sync::LazyLock;

use fancy_regex::{Captures, Regex};

/// Maximum nested depth of `[]` and `()` supported by the transform.
pub(crate) const NEST_DEPTH: usize = 6;

/// Width of a tab stop in spaces; tabs are expanded during normalization.
pub(crate) const TAB_WIDTH: usize = 4;

/// Replace every match of `re` in `text` with the evaluator's output.
///
/// Matches are found left to right in one pass; the evaluator sees each
/// match's captures and returns the replacement text, which is never
/// re-scanned. A runtime fault from the backtracking engine stops the pass
/// and leaves the rest of the text untouched.
pub(crate) fn replace_all<F>(re: &Regex, text: &str, mut eval: F) -> String
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let caps = match caps {
            Ok(caps) => caps,
            Err(e) => {
                tracing::warn!("pattern engine fault, emitting remainder verbatim: {e}");
                break;
            }
        };
        let Some(m) = caps.get(0) else { break };
        out.push_str(&text[last..m.start()]);
        out.push_str(&eval(&caps));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Text of capture group `i`, or `""` when the group did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Reusable pattern fragment matching balanced `[brackets]` up to
/// [`NEST_DEPTH`] levels, built from an atomic-group unit repeated per level.
pub(crate) fn nested_brackets() -> &'static str {
    static NESTED_BRACKETS: LazyLock<String> = LazyLock::new(|| {
        format!(
            "{}{}",
            r"(?>[^\[\]]+|\[".repeat(NEST_DEPTH),
            r"\])*".repeat(NEST_DEPTH)
        )
    });
    &NESTED_BRACKETS
}

/// Reusable pattern fragment matching balanced `(parens)` up to
/// [`NEST_DEPTH`] levels. Whitespace is excluded so a URL never swallows the
/// text after it.
pub(crate) fn nested_parens() -> &'static str {
    static NESTED_PARENS: LazyLock<String> = LazyLock::new(|| {
        format!(
            "{}{}",
            r"(?>[^()\s]+|\(".repeat(NEST_DEPTH),
            r"\))*".repeat(NEST_DEPTH)
        )
    });
    &NESTED_PARENS
}
