//! List processing.
//!
//! Lists recurse through the whole pipeline: loose items (separated by blank
//! lines) re-enter the block gamut, tight items re-enter the list pass for
//! nested sub-lists and then the span gamut. A nesting-level counter on the
//! session selects between the top-level pattern (list must follow a blank
//! line or sit at document start) and the nested pattern (list can start on
//! any line).

use std::sync::LazyLock;

use regex::Regex;

use crate::blocks::outdent;
use crate::engine::Transform;
use crate::pattern::{self, TAB_WIDTH};

const MARKER_UL: &str = "[*+-]";
const MARKER_OL: &str = r"\d+[.]";

fn whole_list_pattern() -> String {
    let lt = TAB_WIDTH - 1;
    format!(
        "(\
         ([ ]{{0,{lt}}}((?:{MARKER_UL}|{MARKER_OL}))[ ]+)\
         (?s:.+?)\
         (?:\\z|\\n{{2,}}(?=\\S)(?![ ]*(?:{MARKER_UL}|{MARKER_OL})[ ]+))\
         )"
    )
}

static LIST_TOP_LEVEL: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let pattern = format!("(?m)(?:(?<=\\n\\n)|\\A\\n?){}", whole_list_pattern());
    fancy_regex::Regex::new(&pattern).expect("top-level list pattern must compile")
});

static LIST_NESTED: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let pattern = format!("(?m)^{}", whole_list_pattern());
    fancy_regex::Regex::new(&pattern).expect("nested list pattern must compile")
});

fn item_pattern(marker: &str) -> fancy_regex::Regex {
    let pattern = format!("(?m)(^[ ]*)({marker})[ ]+((?s:.+?)\\n+)(?=\\z|\\1(?:{marker})[ ]+)");
    fancy_regex::Regex::new(&pattern).expect("list item pattern must compile")
}

static LIST_ITEM_UL: LazyLock<fancy_regex::Regex> = LazyLock::new(|| item_pattern(MARKER_UL));
static LIST_ITEM_OL: LazyLock<fancy_regex::Regex> = LazyLock::new(|| item_pattern(MARKER_OL));

static IS_UL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKER_UL).expect("ul marker pattern must compile"));

static TRAILING_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}\z").expect("trailing blank pattern must compile"));

impl Transform<'_> {
    /// Turn list regions into `<ul>`/`<ol>` markup.
    ///
    /// `inside_paragraphless_item` is true while processing the body of a
    /// tight item; only the outermost invocation runs the span gamut over
    /// item text, otherwise inner items would be span-processed twice.
    pub(crate) fn do_lists(&mut self, text: &str, inside_paragraphless_item: bool) -> String {
        // A different prefix applies before nested lists than top-level
        // lists: at top level a digit-period line inside a paragraph must
        // not start a sub-list.
        let (re, flag) = if self.list_level > 0 {
            (&*LIST_NESTED, inside_paragraphless_item)
        } else {
            (&*LIST_TOP_LEVEL, false)
        };

        pattern::replace_all(re, text, |caps| {
            let list = pattern::group(caps, 1);
            let is_ul = IS_UL_MARKER.is_match(pattern::group(caps, 3));
            let tag = if is_ul { "ul" } else { "ol" };
            let items = self.process_list_items(list, is_ul, flag);
            format!("<{tag}>\n{items}</{tag}>\n")
        })
    }

    /// Split one matched list body into `<li>` items.
    fn process_list_items(
        &mut self,
        list: &str,
        is_ul: bool,
        inside_paragraphless_item: bool,
    ) -> String {
        self.list_level += 1;

        let list = TRAILING_BLANK_LINES.replace_all(list, "\n");
        let re = if is_ul { &*LIST_ITEM_UL } else { &*LIST_ITEM_OL };

        // loose-ness propagates forward: a blank line after one item makes
        // the next item loose as well
        let mut last_item_had_double_newline = false;
        let result = pattern::replace_all(re, &list, |caps| {
            let item = pattern::group(caps, 3);

            let ends_with_double_newline = item.ends_with("\n\n");
            let contains_double_newline =
                ends_with_double_newline || item.contains("\n\n");

            let item = if contains_double_newline || last_item_had_double_newline {
                self.run_block_gamut(&format!("{}\n", outdent(item)), false)
            } else {
                // recursion for sub-lists
                let item = self.do_lists(&outdent(item), true);
                let item = item.trim_end_matches('\n');
                if inside_paragraphless_item {
                    item.to_owned()
                } else {
                    self.run_span_gamut(item)
                }
            };

            last_item_had_double_newline = ends_with_double_newline;
            format!("<li>{item}</li>\n")
        });

        self.list_level -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn gamut(text: &str) -> String {
        let options = Options::default();
        let mut session = Transform::new(&options);
        session.run_block_gamut(text, true)
    }

    #[test]
    fn test_tight_items_stay_inline() {
        assert_eq!(
            gamut("* a\n* b\n\n"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_ordered_markers_select_ol() {
        assert_eq!(
            gamut("1. a\n2. b\n\n"),
            "<ol>\n<li>a</li>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn test_loose_item_wraps_paragraph() {
        assert_eq!(
            gamut("* a\n\n* b\n\n"),
            "<ul>\n<li><p>a</p></li>\n<li><p>b</p></li>\n</ul>"
        );
    }

    #[test]
    fn test_digit_period_mid_paragraph_is_not_a_list() {
        let out = gamut("I recommend upgrading to version\n8. Oops, now this line is treated\nas a sub-list.\n\n");
        assert!(!out.contains("<ol>"), "got {out:?}");
    }

    #[test]
    fn test_list_level_restored_after_processing() {
        let options = Options::default();
        let mut session = Transform::new(&options);
        session.run_block_gamut("* a\n    * b\n\n", true);
        assert_eq!(session.list_level, 0);
    }
}
