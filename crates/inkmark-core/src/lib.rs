//! Pattern-driven Markdown to HTML transformation engine.
//!
//! Markdown allows you to write using an easy-to-read, easy-to-write plain
//! text format, then convert it to structurally valid XHTML (or HTML).
//! The engine works as an ordered sequence of pattern-based rewrites:
//! block-level passes (headers, lists, blockquotes, code blocks, horizontal
//! rules, paragraphs) followed by span-level passes within each block
//! (emphasis, links, images, code spans, autolinks, hard breaks), with
//! side-table bookkeeping that keeps multi-pass rewriting safe: link
//! definitions, hashed HTML blocks, and escaped special characters.
//!
//! # Example
//!
//! ```
//! use inkmark_core::{Markdown, Options};
//!
//! let engine = Markdown::new();
//! assert_eq!(engine.transform("# Title"), "<h1>Title</h1>\n");
//!
//! let html = Markdown::with_options(Options {
//!     empty_element_suffix: ">".to_owned(),
//!     ..Options::default()
//! });
//! assert_eq!(html.transform("---"), "<hr>\n");
//! ```
//!
//! Malformed input is never rejected: unresolved reference links, unmatched
//! emphasis delimiters and unterminated constructs all fall through to
//! literal text. The only I/O-free diagnostics (a placeholder-substitution
//! cap, a pattern-engine fault) are reported through [`tracing`].

mod blocks;
mod engine;
mod escape;
mod html;
mod lists;
mod normalize;
mod options;
mod pattern;
mod spans;

pub use engine::Markdown;
pub use options::Options;
