//! CommonMark rendering via pulldown-cmark.

use pulldown_cmark::{Event, Options, Parser, Tag, html};
use quizmark_markup::{MarkdownRender, RenderedMarkdown};

/// Markdown renderer over pulldown-cmark.
///
/// Raw HTML embedded in the source passes through unchanged; the formatter
/// escapes everything outside markdown regions instead. Top-level
/// paragraphs are counted from the parsed event stream, so content that
/// merely mentions `<p>` (say, in a code block) cannot be mistaken for a
/// paragraph by the formatter's unwrap step.
pub struct CmarkMarkdown {
    gfm: bool,
}

impl CmarkMarkdown {
    /// Create a renderer with GFM extensions enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// When enabled, the parser supports tables, strikethrough
    /// (`~~text~~`) and task lists (`- [ ] item`).
    #[must_use]
    pub const fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

impl Default for CmarkMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRender for CmarkMarkdown {
    fn render(&self, source: &str) -> RenderedMarkdown {
        let events: Vec<Event<'_>> = Parser::new_ext(source, self.parser_options()).collect();
        let paragraphs = top_level_paragraphs(&events);

        let mut out = String::with_capacity(source.len() * 2);
        html::push_html(&mut out, events.into_iter());

        RenderedMarkdown {
            html: out,
            paragraphs,
        }
    }
}

/// Count paragraph elements that are not nested inside another block.
fn top_level_paragraphs(events: &[Event<'_>]) -> usize {
    let mut depth = 0usize;
    let mut count = 0;
    for event in events {
        match event {
            Event::Start(tag) => {
                if depth == 0 && matches!(tag, Tag::Paragraph) {
                    count += 1;
                }
                depth += 1;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_is_one_paragraph() {
        let rendered = CmarkMarkdown::new().render("This is a paragraph");

        assert_eq!(rendered.paragraphs, 1);
        assert_eq!(rendered.html, "<p>This is a paragraph</p>\n");
    }

    #[test]
    fn test_two_paragraphs_are_counted() {
        let rendered = CmarkMarkdown::new().render("first\n\nsecond");

        assert_eq!(rendered.paragraphs, 2);
        assert!(rendered.html.contains("<p>first</p>"));
        assert!(rendered.html.contains("<p>second</p>"));
    }

    #[test]
    fn test_code_block_is_not_a_paragraph() {
        let rendered = CmarkMarkdown::new().render("    <p>literal</p>");

        assert_eq!(rendered.paragraphs, 0);
        assert!(rendered.html.contains("<pre><code>"));
    }

    #[test]
    fn test_heading_is_not_a_paragraph() {
        let rendered = CmarkMarkdown::new().render("# Title");

        assert_eq!(rendered.paragraphs, 0);
        assert!(rendered.html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_heading_plus_paragraph() {
        let rendered = CmarkMarkdown::new().render("# Title\n\nbody");

        assert_eq!(rendered.paragraphs, 1);
        assert!(rendered.html.contains("<h1>Title</h1>"));
        assert!(rendered.html.contains("<p>body</p>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let rendered = CmarkMarkdown::new().render("<b>bold</b> text");

        assert!(rendered.html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_blockquote_paragraph_is_nested() {
        let rendered = CmarkMarkdown::new().render("> quoted");

        assert_eq!(rendered.paragraphs, 0);
        assert!(rendered.html.contains("<blockquote>"));
    }

    #[test]
    fn test_emphasis_renders() {
        let rendered = CmarkMarkdown::new().render("**bold** and *italic*");

        assert_eq!(rendered.paragraphs, 1);
        assert!(rendered.html.contains("<strong>bold</strong>"));
        assert!(rendered.html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_gfm_strikethrough() {
        let rendered = CmarkMarkdown::new().render("~~gone~~");
        assert!(rendered.html.contains("<del>gone</del>"));

        let plain = CmarkMarkdown::new().with_gfm(false).render("~~gone~~");
        assert!(!plain.html.contains("<del>"));
    }

    #[test]
    fn test_empty_source() {
        let rendered = CmarkMarkdown::new().render("");

        assert_eq!(rendered.paragraphs, 0);
        assert_eq!(rendered.html, "");
    }
}
