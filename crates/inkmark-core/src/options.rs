//! Engine configuration.

/// Rendering options for a [`Markdown`](crate::Markdown) engine.
///
/// All fields have documented defaults; an engine built with
/// [`Markdown::new`](crate::Markdown::new) behaves identically to one built
/// with `Markdown::with_options(Options::default())`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// When true, (most) bare plain URLs are auto-hyperlinked.
    ///
    /// Angle-bracketed URLs (`<http://…>`) are always linked regardless of
    /// this flag.
    pub auto_hyperlink: bool,

    /// When true, every newline becomes a literal break tag.
    ///
    /// When false, only lines ending in two or more trailing spaces break.
    pub auto_newlines: bool,

    /// Suffix for empty elements: `" />"` for XHTML output, `">"` for HTML.
    pub empty_element_suffix: String,

    /// When true, problematic URL characters like `[`, `]`, `(` and so forth
    /// are percent-encoded in generated `href`/`src` attributes.
    pub encode_problem_url_characters: bool,

    /// When false, angle-bracketed email addresses are never auto-linked.
    pub link_emails: bool,

    /// When true, bold and italic require non-word characters on either side
    /// of the delimiters.
    pub strict_bold_italic: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            auto_hyperlink: false,
            auto_newlines: false,
            empty_element_suffix: " />".to_owned(),
            encode_problem_url_characters: false,
            link_emails: true,
            strict_bold_italic: false,
        }
    }
}
