//! Morsewave CLI - Command-line interface for Morse code audio synthesis
//!
//! This binary provides commands for translating text to Morse code and
//! rendering it as deterministic 8-bit audio.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use morsewave_cli::commands;

/// Morsewave - Deterministic Morse Code Audio Synthesis
#[derive(Parser)]
#[command(name = "morsewave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text as Morse code audio
    Render {
        /// Text to render (read from stdin when omitted)
        text: Option<String>,

        /// Output file path
        #[arg(short, long, default_value = "morse.wav")]
        output: String,

        /// Path to a synthesis parameters JSON file
        #[arg(short, long)]
        params: Option<String>,

        /// Dit duration in seconds
        #[arg(long)]
        dit: Option<f64>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Carrier frequency in Hz
        #[arg(long)]
        frequency: Option<f64>,

        /// Carrier waveform
        #[arg(long, value_parser = ["sine", "square", "triangle", "sawtooth"])]
        waveform: Option<String>,

        /// Seed for the noise generator
        #[arg(long)]
        seed: Option<u32>,

        /// Write raw signed 8-bit PCM instead of a WAV container
        #[arg(long)]
        raw: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Translate text to its Morse fragment string
    Encode {
        /// Text to translate (read from stdin when omitted)
        text: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            text,
            output,
            params,
            dit,
            sample_rate,
            frequency,
            waveform,
            seed,
            raw,
            json,
        } => {
            let waveform = waveform.map(|w| {
                w.parse::<morsewave_core::Waveform>()
                    .expect("clap should have validated waveform")
            });
            commands::render::run(
                text.as_deref(),
                &output,
                params.as_deref(),
                dit,
                sample_rate,
                frequency,
                waveform,
                seed,
                raw,
                json,
            )
        }
        Commands::Encode { text, json } => commands::encode::run(text.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
