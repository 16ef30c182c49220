//! Mixed-markup text formatting.

use crate::escape::escape_text;
use crate::render::{MarkdownRender, MathRender, RenderedMarkdown};
use crate::tags::{TagKind, discover, merge_regions};

/// Formatting flags for one text surface.
///
/// Each tag kind is only special-cased when its flag is enabled; `inline`
/// switches every latex region from display to inline math layout (a quiz
/// item title wants inline math, a quiz body wants display math).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    latex: bool,
    markdown: bool,
    inline: bool,
}

impl FormatOptions {
    /// Create options with both tag kinds disabled and display-mode math.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latex: false,
            markdown: false,
            inline: false,
        }
    }

    /// Enable or disable `[latex]` regions.
    #[must_use]
    pub const fn with_latex(mut self, enabled: bool) -> Self {
        self.latex = enabled;
        self
    }

    /// Enable or disable `[markdown]` regions.
    #[must_use]
    pub const fn with_markdown(mut self, enabled: bool) -> Self {
        self.markdown = enabled;
        self
    }

    /// Render math inline within the surrounding line instead of as a
    /// standalone block.
    #[must_use]
    pub const fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats mixed-markup exercise text into safe HTML.
///
/// Text outside enabled tag regions, including the delimiters of disabled
/// or malformed tags, is HTML-escaped; the inner text of enabled regions
/// is handed to the injected renderers. Construct once and reuse: the
/// formatter is pure and the renderers are expected to be stateless.
///
/// # Example
///
/// ```
/// use quizmark_markup::{
///     FormatOptions, MarkdownRender, MathRender, RenderedMarkdown, TextFormatter,
/// };
/// # struct Math;
/// # impl MathRender for Math {
/// #     fn render(&self, source: &str, _display_mode: bool) -> String {
/// #         format!("<math>{source}</math>")
/// #     }
/// # }
/// # struct Markdown;
/// # impl MarkdownRender for Markdown {
/// #     fn render(&self, source: &str) -> RenderedMarkdown {
/// #         RenderedMarkdown { html: format!("<p>{source}</p>"), paragraphs: 1 }
/// #     }
/// # }
/// let formatter = TextFormatter::new(Math, Markdown);
/// let options = FormatOptions::new().with_latex(true);
///
/// let html = formatter.format(&options, Some("Solve [latex]x^2[/latex] & report"));
/// assert_eq!(html, "Solve <math>x^2</math> &amp; report");
/// ```
pub struct TextFormatter<M, R> {
    math: M,
    markdown: R,
}

impl<M: MathRender, R: MarkdownRender> TextFormatter<M, R> {
    /// Create a formatter over the given renderers.
    #[must_use]
    pub const fn new(math: M, markdown: R) -> Self {
        Self { math, markdown }
    }

    /// Format `text` into an HTML string.
    ///
    /// Total for any input: `None` yields `""`, malformed tags degrade to
    /// escaped literal text, and overlapping regions (which
    /// [`is_valid_text`](crate::is_valid_text) reports so callers can
    /// refuse them up front) still produce deterministic output.
    #[must_use]
    pub fn format(&self, options: &FormatOptions, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };

        let latex = if options.latex {
            discover(text, TagKind::Latex)
        } else {
            Vec::new()
        };
        let markdown = if options.markdown {
            discover(text, TagKind::Markdown)
        } else {
            Vec::new()
        };
        let regions = merge_regions(&latex, &markdown);

        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;
        for region in regions {
            if region.start < cursor {
                // Overlap artifact of invalid input; the earlier region won.
                continue;
            }
            output.push_str(&escape_text(&text[cursor..region.start]));
            match region.kind {
                TagKind::Latex => {
                    output.push_str(&self.math.render(region.inner(text), !options.inline));
                }
                TagKind::Markdown => {
                    let rendered = self.markdown.render(region.inner(text));
                    output.push_str(&unwrap_single_paragraph(rendered));
                }
            }
            cursor = region.end;
        }
        output.push_str(&escape_text(&text[cursor..]));
        output
    }
}

/// Strip the sole `<p>` wrapper from one-line markdown output so a short
/// snippet does not force block-level layout.
///
/// Only fires when the renderer reported exactly one top-level paragraph
/// and the output is exactly that element. Anything else, like several
/// paragraphs or a paragraph next to another block, is kept verbatim.
fn unwrap_single_paragraph(rendered: RenderedMarkdown) -> String {
    if rendered.paragraphs != 1 {
        return rendered.html;
    }
    let trimmed = rendered.html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) => inner.to_owned(),
        None => rendered.html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake math renderer that records the mode in its output.
    struct FakeMath;

    impl MathRender for FakeMath {
        fn render(&self, source: &str, display_mode: bool) -> String {
            format!("<math display=\"{display_mode}\">{source}</math>")
        }
    }

    /// Fake markdown renderer mimicking a paragraph-wrapping backend:
    /// blank-line-separated chunks each become a `<p>` element, raw HTML
    /// is preserved.
    struct FakeMarkdown;

    impl MarkdownRender for FakeMarkdown {
        fn render(&self, source: &str) -> RenderedMarkdown {
            let chunks: Vec<&str> = source.split("\n\n").collect();
            let html = chunks
                .iter()
                .map(|chunk| format!("<p>{chunk}</p>"))
                .collect::<Vec<_>>()
                .join("\n");
            RenderedMarkdown {
                html: format!("{html}\n"),
                paragraphs: chunks.len(),
            }
        }
    }

    fn formatter() -> TextFormatter<FakeMath, FakeMarkdown> {
        TextFormatter::new(FakeMath, FakeMarkdown)
    }

    fn options(latex: bool, markdown: bool) -> FormatOptions {
        FormatOptions::new()
            .with_latex(latex)
            .with_markdown(markdown)
    }

    #[test]
    fn test_none_yields_empty() {
        assert_eq!(formatter().format(&options(true, true), None), "");
    }

    #[test]
    fn test_empty_yields_empty() {
        assert_eq!(formatter().format(&options(true, true), Some("")), "");
    }

    #[test]
    fn test_plain_text_is_identity() {
        let text = "no tags and no special characters";
        assert_eq!(formatter().format(&options(false, false), Some(text)), text);
    }

    #[test]
    fn test_literal_text_is_escaped() {
        assert_eq!(
            formatter().format(&options(false, false), Some("1 < 2 & 3 > 2")),
            "1 &lt; 2 &amp; 3 &gt; 2"
        );
    }

    #[test]
    fn test_disabled_tags_pass_through_with_inner_escaped() {
        assert_eq!(
            formatter().format(&options(false, false), Some("X [markdown]<b>H</b>[/markdown] Y")),
            "X [markdown]&lt;b&gt;H&lt;/b&gt;[/markdown] Y"
        );
    }

    #[test]
    fn test_enabled_latex_region_is_rendered() {
        assert_eq!(
            formatter().format(&options(true, false), Some("see [latex]x^2[/latex]!")),
            "see <math display=\"true\">x^2</math>!"
        );
    }

    #[test]
    fn test_latex_disabled_stays_literal() {
        assert_eq!(
            formatter().format(&options(false, true), Some("[latex]x^2[/latex]")),
            "[latex]x^2[/latex]"
        );
    }

    #[test]
    fn test_inline_flag_reaches_math_renderer() {
        let inline = FormatOptions::new().with_latex(true).with_inline(true);
        assert_eq!(
            formatter().format(&inline, Some("[latex]x^2[/latex]")),
            "<math display=\"false\">x^2</math>"
        );
    }

    #[test]
    fn test_display_mode_is_the_default() {
        assert_eq!(
            formatter().format(&options(true, false), Some("[latex]x^2[/latex]")),
            "<math display=\"true\">x^2</math>"
        );
    }

    #[test]
    fn test_single_paragraph_is_unwrapped() {
        let html = formatter().format(
            &options(false, true),
            Some("[markdown]This is a paragraph[/markdown]"),
        );

        assert!(!html.contains("<p>This is a paragraph</p>"));
        assert_eq!(html, "This is a paragraph");
    }

    #[test]
    fn test_two_paragraphs_keep_wrappers() {
        let html = formatter().format(
            &options(false, true),
            Some("[markdown]first\n\nsecond[/markdown]"),
        );

        assert!(html.contains("<p>first</p>"));
        assert!(html.contains("<p>second</p>"));
    }

    #[test]
    fn test_segments_concatenate_exactly() {
        assert_eq!(
            formatter().format(
                &options(false, true),
                Some("A<b>A</b>[markdown]B[/markdown]<i>C</i>")
            ),
            "A&lt;b&gt;A&lt;/b&gt;B&lt;i&gt;C&lt;/i&gt;"
        );
    }

    #[test]
    fn test_mixed_kinds_in_order() {
        assert_eq!(
            formatter().format(
                &options(true, true),
                Some("[latex]a[/latex] & [markdown]b[/markdown]")
            ),
            "<math display=\"true\">a</math> &amp; b"
        );
    }

    #[test]
    fn test_mismatched_tags_stay_literal() {
        assert_eq!(
            formatter().format(&options(true, true), Some("[latex]x[/markdown]")),
            "[latex]x[/markdown]"
        );
    }

    #[test]
    fn test_overlapping_input_still_formats() {
        // Invalid per is_valid_text; the formatter stays total: the first
        // region wins and the trailing closing stays literal.
        assert_eq!(
            formatter().format(&options(true, false), Some("[latex][latex]a[/latex][/latex]")),
            "<math display=\"true\">[latex]a</math>[/latex]"
        );
    }

    #[test]
    fn test_cross_kind_overlap_still_formats() {
        let html = formatter().format(
            &options(true, true),
            Some("[latex][markdown]y[/latex][/markdown]"),
        );

        // The latex region starts first and wins; the markdown leftovers
        // degrade to literal text.
        assert_eq!(html, "<math display=\"true\">[markdown]y</math>[/markdown]");
    }

    #[test]
    fn test_unwrap_requires_lone_paragraph_element() {
        // One paragraph reported, but the output is not exactly that
        // element: keep it intact.
        let rendered = RenderedMarkdown {
            html: "<h1>title</h1>\n<p>body</p>\n".to_owned(),
            paragraphs: 1,
        };
        assert_eq!(unwrap_single_paragraph(rendered), "<h1>title</h1>\n<p>body</p>\n");
    }

    #[test]
    fn test_unwrap_ignores_zero_paragraph_output() {
        let rendered = RenderedMarkdown {
            html: "<pre><code>&lt;p&gt;</code></pre>\n".to_owned(),
            paragraphs: 0,
        };
        assert_eq!(
            unwrap_single_paragraph(rendered),
            "<pre><code>&lt;p&gt;</code></pre>\n"
        );
    }

    #[test]
    fn test_options_builders() {
        let opts = FormatOptions::new()
            .with_latex(true)
            .with_markdown(true)
            .with_inline(true);
        assert_eq!(
            opts,
            FormatOptions {
                latex: true,
                markdown: true,
                inline: true,
            }
        );
        assert_eq!(FormatOptions::default(), FormatOptions::new());
    }
}
