//! Renderer seams for math and markdown regions.
//!
//! The formatter owns tag discovery and the escape-or-render decision for
//! every segment of text; the actual LaTeX and Markdown rendering is
//! delegated through these traits. That keeps the core free of renderer
//! dependencies and testable with fakes; the production adapters live in
//! the `quizmark-render` crate.
//!
//! Implementations are expected to be stateless, synchronous and
//! idempotent: construct once, reuse for every call.

/// Renders a LaTeX source string to an HTML fragment.
pub trait MathRender {
    /// Render `source` to HTML.
    ///
    /// `display_mode` selects standalone block layout; `false` lays the
    /// formula out inline within a line of text. Implementations must
    /// absorb invalid input and return best-effort or error-placeholder
    /// markup: a failed expression must not abort the formatting pass.
    fn render(&self, source: &str, display_mode: bool) -> String;
}

/// Markdown rendered to HTML, plus the block-structure signal the
/// formatter needs for its single-paragraph unwrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMarkdown {
    /// Rendered HTML fragment.
    pub html: String,
    /// Number of top-level paragraph elements in `html`, counted from the
    /// parsed structure rather than by searching the markup text.
    pub paragraphs: usize,
}

/// Renders a Markdown source string to an HTML fragment.
pub trait MarkdownRender {
    /// Render `source` to HTML.
    ///
    /// Raw HTML embedded in the source must pass through unchanged, and
    /// each top-level paragraph must be wrapped in a `<p>` element counted
    /// in [`RenderedMarkdown::paragraphs`].
    fn render(&self, source: &str) -> RenderedMarkdown;
}
