//! `quizmark check` command implementation.

use std::path::PathBuf;

use clap::Args;
use quizmark_markup::is_valid_text;

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Input file (reads stdin when omitted).
    input: Option<PathBuf>,

    /// Enable latex tag regions.
    #[arg(long, env = "QUIZMARK_LATEX")]
    latex: bool,

    /// Enable markdown tag regions.
    #[arg(long, env = "QUIZMARK_MARKDOWN")]
    markdown: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let text = read_input(self.input.as_deref())?;

        if is_valid_text(self.latex, self.markdown, &text) {
            output.success("Tag structure is valid");
            Ok(())
        } else {
            Err(CliError::Validation(
                "text contains overlapping or nested tag regions".to_owned(),
            ))
        }
    }
}
