//! KaTeX-backed math rendering.

use katex::Opts;
use quizmark_markup::{MathRender, escape_text};

/// Math renderer backed by the KaTeX typesetting library.
///
/// Options for both layout modes are built once at construction and reused
/// for every render. Invalid LaTeX renders KaTeX's own inline error markup
/// (`throw_on_error` is disabled); engine-level failures are logged and
/// degrade to an escaped placeholder, so rendering never panics and never
/// aborts a formatting pass.
pub struct KatexMath {
    display: Opts,
    inline: Opts,
}

impl KatexMath {
    /// Create a renderer with default KaTeX options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: mode_opts(true),
            inline: mode_opts(false),
        }
    }
}

impl Default for KatexMath {
    fn default() -> Self {
        Self::new()
    }
}

impl MathRender for KatexMath {
    fn render(&self, source: &str, display_mode: bool) -> String {
        let opts = if display_mode {
            &self.display
        } else {
            &self.inline
        };
        match katex::render_with_opts(source, opts) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!("katex failed to render expression: {err}");
                format!(r#"<span class="math-error">{}</span>"#, escape_text(source))
            }
        }
    }
}

/// Build KaTeX options for one layout mode.
fn mode_opts(display_mode: bool) -> Opts {
    // Infallible: every builder field has a default.
    Opts::builder()
        .display_mode(display_mode)
        .throw_on_error(false)
        .build()
        .unwrap()
}
