//! Render command implementation
//!
//! Synthesizes text into Morse code audio and writes it out as an 8-bit
//! mono WAV file, or as raw signed 8-bit PCM with `--raw`.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use morsewave_core::{synthesize_with_params, SynthesisParams, Waveform};

use crate::wav::{samples_to_pcm8, write_wav_to_vec, WavFormat};

/// Run the render command
///
/// # Arguments
/// * `text` - Text to render (read from stdin when absent)
/// * `output` - Output file path
/// * `params_path` - Optional synthesis parameters JSON file
/// * `dit` - Dit duration override in seconds
/// * `sample_rate` - Sample rate override in Hz
/// * `frequency` - Carrier frequency override in Hz
/// * `waveform` - Carrier waveform override
/// * `seed` - Noise seed override
/// * `raw` - Write raw signed PCM instead of a WAV container
/// * `json` - Output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 error
#[allow(clippy::too_many_arguments)]
pub fn run(
    text: Option<&str>,
    output: &str,
    params_path: Option<&str>,
    dit: Option<f64>,
    sample_rate: Option<u32>,
    frequency: Option<f64>,
    waveform: Option<Waveform>,
    seed: Option<u32>,
    raw: bool,
    json: bool,
) -> Result<ExitCode> {
    let text = super::text_or_stdin(text)?;
    let params = load_params(params_path, dit, sample_rate, frequency, waveform, seed)?;

    if !json {
        println!("{} {}", "Rendering:".cyan().bold(), text);
    }

    let result = synthesize_with_params(&text, &params)?;

    let bytes = if raw {
        result.pcm_bytes()
    } else {
        let format = WavFormat::mono(result.sample_rate);
        write_wav_to_vec(&format, &samples_to_pcm8(&result.samples))
    };

    fs::write(output, &bytes).with_context(|| format!("Failed to write output: {}", output))?;

    if json {
        let envelope = serde_json::json!({
            "text": text,
            "morse": result.morse,
            "output": output,
            "format": if raw { "pcm" } else { "wav" },
            "sample_rate": result.sample_rate,
            "num_samples": result.num_samples(),
            "duration_seconds": result.duration_seconds(),
            "pcm_hash": result.pcm_hash,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!(
            "{} Wrote {} samples ({:.2}s) to: {}",
            "SUCCESS".green().bold(),
            result.num_samples(),
            result.duration_seconds(),
            output
        );
        println!("  morse:    {}", result.morse);
        println!("  pcm hash: {}", result.pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}

/// Builds synthesis parameters from an optional JSON file plus flag
/// overrides. Flags win over the file, the file wins over defaults.
fn load_params(
    params_path: Option<&str>,
    dit: Option<f64>,
    sample_rate: Option<u32>,
    carrier_freq: Option<f64>,
    waveform: Option<Waveform>,
    seed: Option<u32>,
) -> Result<SynthesisParams> {
    let mut params = match params_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read params file: {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse params JSON: {}", path))?
        }
        None => SynthesisParams::default(),
    };

    if let Some(dit) = dit {
        params.dit_seconds = dit;
    }
    if let Some(rate) = sample_rate {
        params.sample_rate = rate;
    }
    if let Some(freq) = carrier_freq {
        params.carrier_freq = freq;
    }
    if let Some(waveform) = waveform {
        params.waveform = waveform;
    }
    if let Some(seed) = seed {
        params.seed = seed;
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_params_defaults() {
        let params = load_params(None, None, None, None, None, None).unwrap();
        assert_eq!(params, SynthesisParams::default());
    }

    #[test]
    fn test_load_params_applies_flag_overrides() {
        let params = load_params(
            None,
            Some(0.1),
            Some(22050),
            Some(440.0),
            Some(Waveform::Square),
            Some(7),
        )
        .unwrap();

        assert_eq!(params.dit_seconds, 0.1);
        assert_eq!(params.sample_rate, 22050);
        assert_eq!(params.carrier_freq, 440.0);
        assert_eq!(params.waveform, Waveform::Square);
        assert_eq!(params.seed, 7);
    }

    #[test]
    fn test_load_params_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dit_seconds": 0.02, "waveform": "triangle"}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let params = load_params(Some(path), None, None, None, None, None).unwrap();

        assert_eq!(params.dit_seconds, 0.02);
        assert_eq!(params.waveform, Waveform::Triangle);
        // Unset fields fall back to defaults.
        assert_eq!(params.sample_rate, 44100);
    }

    #[test]
    fn test_load_params_flags_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dit_seconds": 0.02}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let params = load_params(Some(path), Some(0.08), None, None, None, None).unwrap();

        assert_eq!(params.dit_seconds, 0.08);
    }

    #[test]
    fn test_load_params_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"volume": 0.5}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        assert!(load_params(Some(path), None, None, None, None, None).is_err());
    }

    #[test]
    fn test_run_writes_a_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sos.wav");
        let out_str = out.to_str().unwrap();

        run(
            Some("SOS"),
            out_str,
            None,
            Some(0.05),
            Some(8000),
            Some(1000.0),
            None,
            None,
            false,
            true,
        )
        .unwrap();

        let bytes = fs::read(&out).unwrap();
        // 44-byte header plus 12000 samples of "SOS" at these settings.
        assert_eq!(bytes.len(), 44 + 12_000);
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[test]
    fn test_run_writes_raw_pcm() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sos.pcm");
        let out_str = out.to_str().unwrap();

        run(
            Some("SOS"),
            out_str,
            None,
            Some(0.05),
            Some(8000),
            Some(1000.0),
            None,
            None,
            true,
            true,
        )
        .unwrap();

        let bytes = fs::read(&out).unwrap();
        assert_eq!(bytes.len(), 12_000);
        assert_ne!(&bytes[0..4], b"RIFF");
    }

    #[test]
    fn test_run_output_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let out1 = dir.path().join("first.pcm");
        let out2 = dir.path().join("second.pcm");

        // "?" renders as seeded noise, the sensitive case for determinism.
        for out in [&out1, &out2] {
            run(
                Some("?"),
                out.to_str().unwrap(),
                None,
                Some(0.05),
                Some(8000),
                Some(1000.0),
                None,
                Some(7),
                true,
                true,
            )
            .unwrap();
        }

        assert_eq!(fs::read(&out1).unwrap(), fs::read(&out2).unwrap());
    }
}
