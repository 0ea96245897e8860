//! Span-level rewrite passes.
//!
//! Applied within one block (paragraph, header, list item). Order matters:
//! code spans hide their content first, images resolve before anchors
//! (`![foo][f]` looks like an anchor), and autolinks run after anchors so
//! `<url>` delimiters inside inline links aren't double-processed.

use std::fmt::Write;
use std::sync::LazyLock;

use rand::RngExt;
use regex::Regex;

use crate::engine::Transform;
use crate::escape::{
    ESCAPE_TABLE, attribute_encode, encode_code, escape_backslashes, escape_bold_italic, unescape,
};
use crate::html::{Token, tokenize_html};
use crate::pattern::{self, nested_brackets, nested_parens};

/// Temporarily replaces `://` where auto-linking shouldn't happen; restored
/// at the end of span processing, before amp/angle encoding.
const AUTO_LINK_PREVENTION_MARKER: &str = "\u{1A}P";

static CODE_SPAN: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    // equal-length backtick runs delimit the span; backticks inside survive
    fancy_regex::Regex::new(r"(?s)(?<![\\`])(`+)(?!`)(.+?)(?<!`)\1(?!`)")
        .expect("code span pattern must compile")
});

static CODE_TAG_IN_ATTR: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new("(?<=.)</?code>(?=.)").expect("code tag pattern must compile")
});

static IMAGES_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(!\[(.*?)\][ ]?(?:\n[ ]*)?\[(.*?)\])").expect("image ref pattern must compile")
});

static IMAGES_INLINE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?s)(!\\[(.*?)\\]\\s?\\([ ]*({})[ ]*((['\"])(.*?)\\5[ ]*)?\\))",
        nested_parens()
    );
    fancy_regex::Regex::new(&pattern).expect("inline image pattern must compile")
});

static ANCHOR_REF: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?s)(\\[({})\\][ ]?(?:\\n[ ]*)?\\[(.*?)\\])",
        nested_brackets()
    );
    fancy_regex::Regex::new(&pattern).expect("anchor ref pattern must compile")
});

static ANCHOR_INLINE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?s)(\\[({})\\]\\([ ]*({})[ ]*((['\"])(.*?)\\5[ ]*)?\\))",
        nested_brackets(),
        nested_parens()
    );
    fancy_regex::Regex::new(&pattern).expect("inline anchor pattern must compile")
});

static ANCHOR_REF_SHORTCUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(\[([^\[\]]+)\])").expect("anchor shortcut pattern must compile")
});

static ANCHOR_ID_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]*\n[ ]*").expect("id whitespace pattern must compile"));

const CHAR_INSIDE_URL: &str = r"[-A-Z0-9+&@#/%?=~_|\[\]\(\)!:,\.;\x1A]";
const CHAR_ENDING_URL: &str = r"[-A-Z0-9+&@#/%=~_|\[\])]";

static AUTOLINK_BARE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?i)(<|=\")?\\b(https?|ftp)(://{CHAR_INSIDE_URL}*{CHAR_ENDING_URL})(?=$|\\W)"
    );
    fancy_regex::Regex::new(&pattern).expect("bare autolink pattern must compile")
});

static END_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){CHAR_ENDING_URL}")).expect("url end char pattern must compile")
});

static HYPERLINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<((?i:https?|ftp):[^'">\s]+)>"#).expect("hyperlink pattern must compile")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:mailto:)?([-.\w]+@[-a-z0-9]+(?:\.[-a-z0-9]+)*\.[a-z]+)>")
        .expect("email pattern must compile")
});

static MAILTO_VISIBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\">.+?:").expect("mailto strip pattern must compile"));

static AMPS: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"&(?!(?:#[0-9]+|#[xX][a-fA-F0-9]+|[a-zA-Z][a-zA-Z0-9]*);)")
        .expect("ampersand pattern must compile")
});

static ANGLES: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"<(?![A-Za-z/?$!])").expect("angle pattern must compile")
});

static BOLD: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?s)(\*\*|__)(?=\S)(.+?[*_]*)(?<=\S)\1")
        .expect("bold pattern must compile")
});

static ITALIC: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?s)(\*|_)(?=\S)(.+?)(?<=\S)\1").expect("italic pattern must compile")
});

static STRICT_BOLD: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?s)(^|[\W_])(?:(?!\1)|(?=^))(\*|_)\2(?=\S)(.*?\S)\2\2(?!\2)(?=[\W_]|$)")
        .expect("strict bold pattern must compile")
});

static STRICT_ITALIC: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(
        r"(?s)(^|[\W_])(?:(?!\1)|(?=^))(\*|_)(?=\S)((?:(?!\2).)*?\S)\2(?!\2)(?=[\W_]|$)",
    )
    .expect("strict italic pattern must compile")
});

static TRAILING_SPACES_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" {2,}\n").expect("hard break pattern must compile"));

static IMAGE_ALT_SPECIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\]()]").expect("alt specials pattern must compile"));

/// Escape brackets and parens in alt text so syntax ambiguities can't
/// produce broken markup downstream.
fn escape_image_alt_text(s: &str) -> String {
    let s = escape_bold_italic(s);
    IMAGE_ALT_SPECIALS
        .replace_all(&s, |caps: &regex::Captures<'_>| {
            caps[0]
                .chars()
                .next()
                .map_or_else(String::new, |c| ESCAPE_TABLE.token(c).to_owned())
        })
        .into_owned()
}

fn save_from_auto_linking(s: &str) -> String {
    s.replace("://", AUTO_LINK_PREVENTION_MARKER)
}

/// Encode ampersands that aren't part of an entity and angle brackets that
/// don't open a tag-like sequence.
pub(crate) fn encode_amps_and_angles(text: &str) -> String {
    let text = pattern::replace_all(&AMPS, text, |_| "&amp;".to_owned());
    pattern::replace_all(&ANGLES, &text, |_| "&lt;".to_owned())
}

impl Transform<'_> {
    /// Run the span-level passes over one block's text.
    pub(crate) fn run_span_gamut(&self, text: &str) -> String {
        let mut text = self.do_code_spans(text);
        text = self.escape_special_chars_within_tag_attributes(&text);
        text = escape_backslashes(&text);

        // Images must come first, because ![foo][f] looks like an anchor.
        text = self.do_images(&text);
        text = self.do_anchors(&text);

        // Must come after anchors, so the < and > delimiters in inline links
        // like [this](<url>) aren't processed again.
        text = self.do_auto_links(&text);

        text = text.replace(AUTO_LINK_PREVENTION_MARKER, "://");

        text = encode_amps_and_angles(&text);
        text = self.do_italics_and_bold(&text);
        self.do_hard_breaks(&text)
    }

    fn do_code_spans(&self, text: &str) -> String {
        pattern::replace_all(&CODE_SPAN, text, |caps| {
            let span = pattern::group(caps, 2).trim_matches(' ');
            let span = encode_code(span);
            // suppress auto-linking inside the span; not needed in code
            // *blocks*, which never reach the span gamut
            let span = save_from_auto_linking(&span);
            format!("<code>{span}</code>")
        })
    }

    /// Within tags, escape `\`, `` ` ``, `*` and `_` so they don't collide
    /// with their Markdown meaning when the emphasis pass runs over markup.
    fn escape_special_chars_within_tag_attributes(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for token in tokenize_html(text) {
            match token {
                Token::Text(value) => out.push_str(value),
                Token::Tag(value) => {
                    let mut value = value.replace('\\', ESCAPE_TABLE.token('\\'));
                    if self.options.auto_hyperlink && value.starts_with("<!") {
                        // a URL inside a comment must not autolink
                        value = value.replace('/', ESCAPE_TABLE.token('/'));
                    }
                    value = pattern::replace_all(&CODE_TAG_IN_ATTR, &value, |_| {
                        ESCAPE_TABLE.token('`').to_owned()
                    });
                    out.push_str(&escape_bold_italic(&value));
                }
            }
        }
        out
    }

    /// `![alt text][id]` and `![alt text](url "optional title")`.
    fn do_images(&self, text: &str) -> String {
        let text = IMAGES_REF
            .replace_all(text, |caps: &regex::Captures<'_>| {
                self.image_reference_evaluator(caps)
            })
            .into_owned();
        pattern::replace_all(&IMAGES_INLINE, &text, |caps| {
            self.image_inline_evaluator(caps)
        })
    }

    fn image_reference_evaluator(&self, caps: &regex::Captures<'_>) -> String {
        let whole = &caps[1];
        let alt = &caps[2];
        let mut link_id = caps[3].to_lowercase();

        // shortcut references like ![this][] use the alt text as id
        if link_id.is_empty() {
            link_id = alt.to_lowercase();
        }

        match self.urls.get(&link_id) {
            Some(url) => {
                let title = self.titles.get(&link_id).map(String::as_str);
                self.image_tag(url, alt, title)
            }
            // no such id: leave intact
            None => whole.to_owned(),
        }
    }

    fn image_inline_evaluator(&self, caps: &fancy_regex::Captures<'_>) -> String {
        let alt = pattern::group(caps, 2);
        let mut url = pattern::group(caps, 3);
        let title = pattern::group(caps, 6);

        if url.starts_with('<') && url.ends_with('>') && url.len() >= 2 {
            url = &url[1..url.len() - 1];
        }
        self.image_tag(url, alt, Some(title))
    }

    fn image_tag(&self, url: &str, alt: &str, title: Option<&str>) -> String {
        let alt = escape_image_alt_text(&attribute_encode(alt));
        let url = escape_bold_italic(&self.encode_problem_url_chars(url));
        let mut result = format!("<img src=\"{url}\" alt=\"{alt}\"");
        if let Some(title) = title
            && !title.is_empty()
        {
            let title = attribute_encode(&escape_bold_italic(title));
            let _ = write!(result, " title=\"{title}\"");
        }
        result.push_str(&self.options.empty_element_suffix);
        result
    }

    /// Anchors, in order: `[text][id]`, `[text](url "title")`, `[text]`.
    fn do_anchors(&self, text: &str) -> String {
        // reference-style first
        let text = pattern::replace_all(&ANCHOR_REF, text, |caps| {
            self.anchor_ref_evaluator(caps)
        });
        // then inline
        let text = pattern::replace_all(&ANCHOR_INLINE, &text, |caps| {
            self.anchor_inline_evaluator(caps)
        });
        // shortcuts last, in case the text also uses [link][1] or [link](/foo)
        ANCHOR_REF_SHORTCUT
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                self.anchor_ref_shortcut_evaluator(caps)
            })
            .into_owned()
    }

    fn anchor_ref_evaluator(&self, caps: &fancy_regex::Captures<'_>) -> String {
        let whole = pattern::group(caps, 1);
        let link_text = save_from_auto_linking(pattern::group(caps, 2));
        let mut link_id = pattern::group(caps, 3).to_lowercase();

        // shortcut references like [this][] use the link text as id
        if link_id.is_empty() {
            link_id = link_text.to_lowercase();
        }

        let Some(url) = self.urls.get(&link_id) else {
            return whole.to_owned();
        };
        let url = escape_bold_italic(&self.encode_problem_url_chars(url));
        let mut result = format!("<a href=\"{url}\"");
        if let Some(title) = self.titles.get(&link_id) {
            let title = attribute_encode(title);
            let title = attribute_encode(&escape_bold_italic(&title));
            let _ = write!(result, " title=\"{title}\"");
        }
        let _ = write!(result, ">{link_text}</a>");
        result
    }

    fn anchor_ref_shortcut_evaluator(&self, caps: &regex::Captures<'_>) -> String {
        let whole = &caps[1];
        let link_text = save_from_auto_linking(&caps[2]);
        // lower case, newlines and surrounding spaces collapse to one space
        let link_id = ANCHOR_ID_WHITESPACE
            .replace_all(&link_text.to_lowercase(), " ")
            .into_owned();

        let Some(url) = self.urls.get(&link_id) else {
            return whole.to_owned();
        };
        let url = escape_bold_italic(&self.encode_problem_url_chars(url));
        let mut result = format!("<a href=\"{url}\"");
        if let Some(title) = self.titles.get(&link_id) {
            let title = escape_bold_italic(&attribute_encode(title));
            let _ = write!(result, " title=\"{title}\"");
        }
        let _ = write!(result, ">{link_text}</a>");
        result
    }

    fn anchor_inline_evaluator(&self, caps: &fancy_regex::Captures<'_>) -> String {
        let link_text = save_from_auto_linking(pattern::group(caps, 2));
        let title = pattern::group(caps, 6);

        let mut url = escape_bold_italic(&self.encode_problem_url_chars(pattern::group(caps, 3)));
        if url.starts_with('<') && url.ends_with('>') && url.len() >= 2 {
            url = url[1..url.len() - 1].to_owned();
        }

        let mut result = format!("<a href=\"{url}\"");
        if !title.is_empty() {
            let title = escape_bold_italic(&attribute_encode(title));
            let _ = write!(result, " title=\"{title}\"");
        }
        let _ = write!(result, ">{link_text}</a>");
        result
    }

    /// Angle-bracketed URLs and emails, plus bare URLs when enabled.
    fn do_auto_links(&self, text: &str) -> String {
        let mut text = text.to_owned();

        if self.options.auto_hyperlink {
            // wrap bare URLs in <>'s so the pass below links them too
            text = pattern::replace_all(&AUTOLINK_BARE, &text, |caps| {
                handle_trailing_parens(caps)
            });
        }

        text = HYPERLINK
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                let link = &caps[1];
                format!(
                    "<a href=\"{}\">{link}</a>",
                    escape_bold_italic(&self.encode_problem_url_chars(link))
                )
            })
            .into_owned();

        if self.options.link_emails {
            text = EMAIL
                .replace_all(&text, |caps: &regex::Captures<'_>| {
                    self.email_evaluator(&caps[1])
                })
                .into_owned();
        }

        text
    }

    fn email_evaluator(&self, address: &str) -> String {
        let email = format!("mailto:{}", unescape(address));
        let email = encode_email_address(&email);
        let email = format!("<a href=\"{email}\">{email}</a>");

        // strip the mailto: from the visible part
        MAILTO_VISIBLE.replace(&email, "\">").into_owned()
    }

    /// `**bold**` / `__bold__` and `*italic*` / `_italic_`.
    fn do_italics_and_bold(&self, text: &str) -> String {
        // <strong> must go first, then <em>
        if self.options.strict_bold_italic {
            let text = pattern::replace_all(&STRICT_BOLD, text, |caps| {
                format!(
                    "{}<strong>{}</strong>",
                    pattern::group(caps, 1),
                    pattern::group(caps, 3)
                )
            });
            pattern::replace_all(&STRICT_ITALIC, &text, |caps| {
                format!(
                    "{}<em>{}</em>",
                    pattern::group(caps, 1),
                    pattern::group(caps, 3)
                )
            })
        } else {
            let text = pattern::replace_all(&BOLD, text, |caps| {
                format!("<strong>{}</strong>", pattern::group(caps, 2))
            });
            pattern::replace_all(&ITALIC, &text, |caps| {
                format!("<em>{}</em>", pattern::group(caps, 2))
            })
        }
    }

    fn do_hard_breaks(&self, text: &str) -> String {
        let br = format!("<br{}\n", self.options.empty_element_suffix);
        if self.options.auto_newlines {
            text.replace('\n', &br)
        } else {
            TRAILING_SPACES_BREAK
                .replace_all(text, regex::NoExpand(&br))
                .into_owned()
        }
    }

    /// Percent-encode unusual "problem" characters in URLs so they don't
    /// confuse downstream URL detection. Colons before a slash or a digit
    /// (schemes, ports) are exempt.
    pub(crate) fn encode_problem_url_chars(&self, url: &str) -> String {
        if !self.options.encode_problem_url_characters {
            return url.to_owned();
        }

        const PROBLEM_CHARS: &[char] = &['"', '\'', '*', '(', ')', '[', ']', '$', ':'];

        let chars: Vec<char> = url.chars().collect();
        let mut out = String::with_capacity(url.len());
        for (i, &c) in chars.iter().enumerate() {
            let mut encode = PROBLEM_CHARS.contains(&c);
            if encode && c == ':' && i < chars.len() - 1 {
                let next = chars[i + 1];
                encode = next != '/' && !next.is_ascii_digit();
            }
            if encode {
                let _ = write!(out, "%{:02x}", c as u32);
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Evaluator for bare-URL autolinking: balance trailing parentheses so a
/// URL like `http://example.com/path_(x)` keeps its close paren while
/// `(see http://example.com)` leaves it outside the link.
fn handle_trailing_parens(caps: &fancy_regex::Captures<'_>) -> String {
    // The first group simulates a negative lookbehind: when a < or =" is
    // present the URL is already linked, so the whole match passes through
    // unhandled and can't be matched again.
    if caps.get(1).is_some() {
        return pattern::group(caps, 0).to_owned();
    }

    let proto = pattern::group(caps, 2);
    let mut link = pattern::group(caps, 3).to_owned();
    if !link.ends_with(')') {
        return format!("<{proto}{link}>");
    }

    let mut level = 0i32;
    for c in link.chars() {
        match c {
            '(' => level = if level <= 0 { 1 } else { level + 1 },
            ')' => level -= 1,
            _ => {}
        }
    }

    let mut tail = String::new();
    if level < 0 {
        // push the unbalanced close parens outside the link
        let excess = level.unsigned_abs() as usize;
        let trailing = link.chars().rev().take_while(|&c| c == ')').count();
        let cut = link.len() - trailing.min(excess);
        tail = link[cut..].to_owned();
        link.truncate(cut);
    }
    if !tail.is_empty()
        && let Some(last) = link.chars().last()
    {
        // a char that can't end a URL travels with the parens
        if !END_CHAR.is_match(last.encode_utf8(&mut [0; 4])) {
            tail.insert(0, last);
            link.pop();
        }
    }
    format!("<{proto}{link}>{tail}")
}

/// Encode each byte of a mailto URI as raw (~10%), hex entity (~45%) or
/// decimal entity (~45%), to foil naive address-harvesting bots. `:` is
/// never encoded (the visible-text strip needs to find it) and `@` always
/// is.
fn encode_email_address(address: &str) -> String {
    let mut rng = rand::rng();
    let mut out = String::with_capacity(address.len() * 5);
    for b in address.bytes() {
        let roll: u32 = rng.random_range(1..100);
        if (roll > 90 || b == b':') && b != b'@' {
            out.push(char::from(b));
        } else if roll < 45 {
            let _ = write!(out, "&#x{b:02x};");
        } else {
            let _ = write!(out, "&#{b};");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn span(text: &str) -> String {
        span_with(text, Options::default())
    }

    // run the span gamut plus the final unescape, like `transform` does
    fn span_with(text: &str, options: Options) -> String {
        let session = Transform::new(&options);
        unescape(&session.run_span_gamut(text))
    }

    #[test]
    fn test_amps_and_angles() {
        assert_eq!(encode_amps_and_angles("fish & chips"), "fish &amp; chips");
        assert_eq!(encode_amps_and_angles("&amp; &#65; &#x41;"), "&amp; &#65; &#x41;");
        assert_eq!(encode_amps_and_angles("1 < 2"), "1 &lt; 2");
        assert_eq!(encode_amps_and_angles("<b> </b> <!-- <? stay"), "<b> </b> <!-- <? stay");
    }

    #[test]
    fn test_code_span_trims_edge_spaces() {
        assert_eq!(span("type `` `bar` ``"), "type <code>`bar`</code>");
    }

    #[test]
    fn test_code_span_suppresses_autolink() {
        let options = Options {
            auto_hyperlink: true,
            ..Options::default()
        };
        assert_eq!(
            span_with("`http://example.com`", options),
            "<code>http://example.com</code>"
        );
    }

    #[test]
    fn test_emphasis_mid_word_allowed_by_default() {
        assert_eq!(
            span("before**bold**after before_italic_after"),
            "before<strong>bold</strong>after before<em>italic</em>after"
        );
    }

    #[test]
    fn test_strict_emphasis_requires_word_boundary() {
        let options = Options {
            strict_bold_italic: true,
            ..Options::default()
        };
        assert_eq!(
            span_with("before*bold*after before_italic_after", options.clone()),
            "before*bold*after before_italic_after"
        );
        assert_eq!(
            span_with("before *bold* after", options.clone()),
            "before <em>bold</em> after"
        );
        assert_eq!(
            span_with("**bold**", options),
            "<strong>bold</strong>"
        );
    }

    #[test]
    fn test_hard_break_requires_trailing_spaces() {
        assert_eq!(span("one\ntwo"), "one\ntwo");
        assert_eq!(span("one  \ntwo"), "one<br />\ntwo");
    }

    #[test]
    fn test_auto_newlines_break_everywhere() {
        let options = Options {
            auto_newlines: true,
            ..Options::default()
        };
        assert_eq!(span_with("one\ntwo", options), "one<br />\ntwo");
    }

    #[test]
    fn test_bare_url_trailing_paren_balancing() {
        let options = Options {
            auto_hyperlink: true,
            ..Options::default()
        };
        assert_eq!(
            span_with("(see http://example.com/a)", options.clone()),
            "(see <a href=\"http://example.com/a\">http://example.com/a</a>)"
        );
        assert_eq!(
            span_with("http://example.com/a_(b)", options),
            "<a href=\"http://example.com/a_(b)\">http://example.com/a_(b)</a>"
        );
    }

    #[test]
    fn test_problem_url_chars() {
        let options = Options {
            encode_problem_url_characters: true,
            ..Options::default()
        };
        let session = Transform::new(&options);
        assert_eq!(session.encode_problem_url_chars("/'*_[]()/"), "/%27%2a_%5b%5d%28%29/");
        // scheme and port colons stay readable
        assert_eq!(
            session.encode_problem_url_chars("http://host:8080/x"),
            "http://host:8080/x"
        );
    }

    #[test]
    fn test_email_obfuscation_decodes_to_address() {
        let encoded = encode_email_address("mailto:foo@example.com");
        assert_eq!(decode_entities(&encoded), "mailto:foo@example.com");
        // @ is always an entity, : never is
        assert!(!encoded.contains('@'));
        assert!(encoded.contains(':'));
    }

    fn decode_entities(text: &str) -> String {
        let re = Regex::new(r"&#x([0-9a-fA-F]+);|&#([0-9]+);").unwrap();
        re.replace_all(text, |caps: &regex::Captures<'_>| {
            let code = match caps.get(1) {
                Some(hex) => u32::from_str_radix(hex.as_str(), 16).unwrap(),
                None => caps[2].parse().unwrap(),
            };
            char::from_u32(code).unwrap().to_string()
        })
        .into_owned()
    }
}
