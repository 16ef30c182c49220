//! Production renderer adapters for `quizmark-markup`.
//!
//! - [`KatexMath`]: LaTeX rendered in-process through the KaTeX
//!   typesetting library.
//! - [`CmarkMarkdown`]: CommonMark (plus GFM extensions) rendered through
//!   pulldown-cmark.
//!
//! Both are stateless value types meant to be constructed once and handed
//! to a `TextFormatter`:
//!
//! ```
//! use quizmark_markup::{FormatOptions, TextFormatter};
//! use quizmark_render::{CmarkMarkdown, KatexMath};
//!
//! let formatter = TextFormatter::new(KatexMath::new(), CmarkMarkdown::new());
//! let options = FormatOptions::new().with_markdown(true);
//!
//! let html = formatter.format(&options, Some("[markdown]**ready**[/markdown]"));
//! assert_eq!(html, "<strong>ready</strong>");
//! ```

mod markdown;
mod math;

pub use markdown::CmarkMarkdown;
pub use math::KatexMath;
