//! Block-level rewrite passes.
//!
//! The passes run in a fixed order: headers, horizontal rules, lists, code
//! blocks, blockquotes, then a re-hash of generated markup and paragraph
//! formation. Later passes assume earlier constructs are already resolved
//! (code must be protected before paragraph wrapping, list markers must not
//! be mistaken for ordered-list starts inside a paragraph).

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::Transform;
use crate::escape::{encode_code, hash_key};
use crate::pattern::{self, TAB_WIDTH};

static NEWLINES_LEADING_TRAILING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\n+|\n+\z").expect("newline trim pattern must compile"));

static NEWLINES_MULTIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph split pattern must compile"));

static HTML_BLOCK_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{1A}H\\d+H").expect("block hash pattern must compile"));

static HEADER_SETEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(.+?)[ ]*\n(=+|-+)[ ]*\n+").expect("setext header pattern must compile")
});

static HEADER_ATX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#{1,6})[ ]*(.+?)[ ]*#*\n+").expect("atx header pattern must compile")
});

static HORIZONTAL_RULES: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?m)^[ ]{0,3}([-*_])(?>[ ]{0,2}\1){2,}[ ]*$")
        .expect("horizontal rule pattern must compile")
});

static CODE_BLOCK: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?m)(?:\\n\\n|\\A\\n?)((?:[ ]{{{TAB_WIDTH}}}.*\\n+)+)(?:(?=^[ ]{{0,{TAB_WIDTH}}}[^ \\t\\n])|\\z)"
    );
    fancy_regex::Regex::new(&pattern).expect("code block pattern must compile")
});

static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)((?:^[ ]*>[ ]?.+\n(?:.+\n)*\n*)+)").expect("blockquote pattern must compile")
});

static BLOCKQUOTE_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ ]*>[ ]?").expect("quote strip pattern must compile"));

static BLOCKQUOTE_BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ ]+$").expect("blank line pattern must compile"));

static BLOCKQUOTE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^").expect("indent pattern must compile"));

static BLOCKQUOTE_PRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(\s*<pre>.+?</pre>)").expect("pre fixup pattern must compile"));

static BLOCKQUOTE_PRE_DEDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  ").expect("pre dedent pattern must compile"));

static OUTDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?m)^[ ]{{1,{TAB_WIDTH}}}")).expect("outdent pattern must compile")
});

/// Remove one level of line-leading indentation.
pub(crate) fn outdent(block: &str) -> String {
    OUTDENT.replace_all(block, "").into_owned()
}

impl Transform<'_> {
    /// Run the block-level passes over `text`.
    ///
    /// `unhash` is false when invoked from loose list items: their hashed
    /// fragments resolve later, in the outer paragraph pass.
    pub(crate) fn run_block_gamut(&mut self, text: &str, unhash: bool) -> String {
        let mut text = self.do_headers(text);
        text = self.do_horizontal_rules(&text);
        text = self.do_lists(&text, false);
        text = self.do_code_blocks(&text);
        text = self.do_block_quotes(&text);

        // Raw HTML was hashed before the gamut started; this pass hides the
        // markup generated above so it won't be wrapped in <p> tags.
        text = self.hash_html_blocks(&text);

        self.form_paragraphs(&text, unhash)
    }

    /// Setext (`===`/`---` underline) and ATX (`#`..`######`) headers.
    fn do_headers(&self, text: &str) -> String {
        let text = HEADER_SETEXT
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let level = if caps[2].starts_with('=') { 1 } else { 2 };
                format!("<h{level}>{}</h{level}>\n\n", self.run_span_gamut(&caps[1]))
            })
            .into_owned();
        HEADER_ATX
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                let level = caps[1].len();
                format!("<h{level}>{}</h{level}>\n\n", self.run_span_gamut(&caps[2]))
            })
            .into_owned()
    }

    /// Three or more of the same marker, optionally space-separated, alone
    /// on a line.
    fn do_horizontal_rules(&self, text: &str) -> String {
        let hr = format!("<hr{}\n", self.options.empty_element_suffix);
        pattern::replace_all(&HORIZONTAL_RULES, text, |_| hr.clone())
    }

    /// Runs of lines indented by at least one tab width.
    fn do_code_blocks(&self, text: &str) -> String {
        pattern::replace_all(&CODE_BLOCK, text, |caps| {
            let code = encode_code(&outdent(pattern::group(caps, 1)));
            let code = NEWLINES_LEADING_TRAILING.replace_all(&code, "");
            format!("\n\n<pre><code>{code}\n</code></pre>\n\n")
        })
    }

    /// Contiguous `>`-prefixed regions, recursing into the block gamut.
    fn do_block_quotes(&mut self, text: &str) -> String {
        BLOCKQUOTE
            .replace_all(text, |caps: &regex::Captures<'_>| {
                self.block_quote_evaluator(&caps[1])
            })
            .into_owned()
    }

    fn block_quote_evaluator(&mut self, bq: &str) -> String {
        // trim one level of quoting and any whitespace-only lines
        let bq = BLOCKQUOTE_STRIP.replace_all(bq, "");
        let bq = BLOCKQUOTE_BLANK.replace_all(&bq, "");
        let bq = self.run_block_gamut(&bq, true);
        let bq = BLOCKQUOTE_INDENT.replace_all(&bq, "  ");
        // the added indentation breaks <pre> content, so undo it there
        let bq = BLOCKQUOTE_PRE.replace_all(&bq, |caps: &regex::Captures<'_>| {
            BLOCKQUOTE_PRE_DEDENT.replace_all(&caps[1], "").into_owned()
        });

        let bq = format!("<blockquote>\n{bq}\n</blockquote>");
        let key = hash_key(&bq, true);
        self.html_blocks.insert(key.clone(), bq);

        // hashed so the paragraph pass leaves the markup alone
        format!("\n\n{key}\n\n")
    }

    /// Split on blank lines; unhash hidden blocks, wrap everything else in
    /// `<p>` tags after span-level processing.
    fn form_paragraphs(&mut self, text: &str, unhash: bool) -> String {
        let text = NEWLINES_LEADING_TRAILING.replace_all(text, "");
        if text.is_empty() {
            return String::new();
        }

        let mut grafs = Vec::new();
        for graf in NEWLINES_MULTIPLE.split(&text) {
            if graf.starts_with("\u{1A}H") {
                let mut graf = graf.to_owned();
                if unhash {
                    // Substitution repeats because an unhashed fragment can
                    // itself contain tokens (nested lists, blockquotes). The
                    // cap guards against a contradictory internal mapping;
                    // user input alone cannot trigger it.
                    let mut sanity = 50;
                    let mut keep_going = true;
                    while keep_going && sanity > 0 {
                        keep_going = false;
                        graf = HTML_BLOCK_HASH
                            .replace_all(&graf, |caps: &regex::Captures<'_>| {
                                match self.html_blocks.get(&caps[0]) {
                                    Some(fragment) => {
                                        keep_going = true;
                                        fragment.clone()
                                    }
                                    None => caps[0].to_owned(),
                                }
                            })
                            .into_owned();
                        sanity -= 1;
                    }
                    if keep_going {
                        tracing::warn!(
                            "html block unhash cap reached, emitting remaining placeholders"
                        );
                    }
                }
                grafs.push(graf);
            } else {
                // span-level processing, then wrap in <p>; leading whitespace
                // introduced by earlier nesting moves outside the tag
                let spanned = self.run_span_gamut(graf);
                let trimmed = spanned.trim_start_matches(' ');
                let ws = &spanned[..spanned.len() - trimmed.len()];
                grafs.push(format!("{ws}<p>{trimmed}</p>"));
            }
        }

        grafs.join("\n\n")
    }
}
