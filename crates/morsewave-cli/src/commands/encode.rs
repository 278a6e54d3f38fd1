//! Encode command implementation
//!
//! Translates text to its Morse fragment string without rendering audio.
//! Useful for checking what a given input will sound like: `#` marks
//! characters that will degrade to noise bursts.

use anyhow::Result;
use std::process::ExitCode;

use morsewave_core::encode;

/// Run the encode command
///
/// # Arguments
/// * `text` - Text to translate (read from stdin when absent)
/// * `json` - Output machine-readable JSON instead of the bare string
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(text: Option<&str>, json: bool) -> Result<ExitCode> {
    let text = super::text_or_stdin(text)?;
    let morse = encode(&text);

    if json {
        let envelope = serde_json::json!({
            "text": text,
            "morse": morse,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("{}", morse);
    }

    Ok(ExitCode::SUCCESS)
}
