//! Mixed-markup formatting for quiz exercise text.
//!
//! Author-supplied text may contain `[latex]...[/latex]` and
//! `[markdown]...[/markdown]` regions. This crate owns tag discovery,
//! overlap validation and the escape-or-render decision for every segment
//! of the text; the actual math and markdown rendering is delegated to
//! injected [`MathRender`] / [`MarkdownRender`] implementations (the
//! `quizmark-render` crate provides the production adapters).
//!
//! Everything outside an enabled region, including the delimiters of
//! disabled or malformed tags, is HTML-escaped, so literal author text can
//! never inject markup into the produced HTML.
//!
//! # Architecture
//!
//! - [`discover`]: scan text into per-kind [`TagRegion`] lists
//! - [`is_valid_text`]: reject overlapping or nested regions up front
//! - [`TextFormatter`]: escape literal segments, render enabled regions,
//!   concatenate in source order
//!
//! Both operations share the same discovery scan, so the validator and the
//! formatter always agree on which regions exist.
//!
//! # Example
//!
//! ```
//! use quizmark_markup::is_valid_text;
//!
//! assert!(is_valid_text(true, true, "[latex]x[/latex][markdown]y[/markdown]"));
//! assert!(!is_valid_text(true, true, "[latex][markdown]y[/latex][/markdown]"));
//! ```

mod escape;
mod format;
mod render;
mod tags;
mod validate;

pub use escape::escape_text;
pub use format::{FormatOptions, TextFormatter};
pub use render::{MarkdownRender, MathRender, RenderedMarkdown};
pub use tags::{TagKind, TagRegion, discover};
pub use validate::is_valid_text;
