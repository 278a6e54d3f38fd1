//! CLI command implementations

use std::io::Read;

use anyhow::Context;

pub mod encode;
pub mod render;

/// Returns the given text, or reads it from stdin when absent.
///
/// Trailing newlines are stripped so piped input renders the same audio as
/// the equivalent positional argument.
pub(crate) fn text_or_stdin(text: Option<&str>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer
                .trim_end_matches(|c| c == '\r' || c == '\n')
                .to_string())
        }
    }
}
