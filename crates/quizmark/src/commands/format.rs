//! `quizmark format` command implementation.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use quizmark_markup::{FormatOptions, TextFormatter, is_valid_text};
use quizmark_render::{CmarkMarkdown, KatexMath};

use super::read_input;
use crate::error::CliError;

/// Arguments for the format command.
#[derive(Args)]
pub(crate) struct FormatArgs {
    /// Input file (reads stdin when omitted).
    input: Option<PathBuf>,

    /// Enable latex tag regions.
    #[arg(long, env = "QUIZMARK_LATEX")]
    latex: bool,

    /// Enable markdown tag regions.
    #[arg(long, env = "QUIZMARK_MARKDOWN")]
    markdown: bool,

    /// Render math inline instead of in display mode.
    #[arg(long)]
    inline: bool,

    /// Refuse structurally invalid input instead of formatting best-effort.
    #[arg(long)]
    check: bool,

    /// Output file (writes stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl FormatArgs {
    /// Execute the format command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = read_input(self.input.as_deref())?;

        if self.check && !is_valid_text(self.latex, self.markdown, &text) {
            return Err(CliError::Validation(
                "text contains overlapping or nested tag regions".to_owned(),
            ));
        }

        let options = FormatOptions::new()
            .with_latex(self.latex)
            .with_markdown(self.markdown)
            .with_inline(self.inline);
        let formatter = TextFormatter::new(KatexMath::new(), CmarkMarkdown::new());

        tracing::info!(
            latex = self.latex,
            markdown = self.markdown,
            bytes = text.len(),
            "formatting input"
        );
        let html = formatter.format(&options, Some(&text));

        match self.output {
            Some(path) => fs::write(path, html)?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
