//! CLI command implementations.

mod check;
mod format;

use std::fs;
use std::io::Read;
use std::path::Path;

pub(crate) use check::CheckArgs;
pub(crate) use format::FormatArgs;

use crate::error::CliError;

/// Read input text from a file, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
