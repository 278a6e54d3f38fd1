//! Morsewave Core
//!
//! This crate turns plain text into Morse code audio through a fixed
//! pipeline:
//!
//! - **Encoding** - Text becomes a string of dot/dash fragments
//! - **Sequencing** - Fragments become timed tone, pause, and noise notes
//! - **Rendering** - Notes become quantized 8-bit PCM samples
//!
//! Letters and digits are translated through the international Morse
//! table. Characters outside the table degrade to short noise bursts
//! instead of failing, so arbitrary input always produces audio.
//!
//! # Determinism
//!
//! All synthesis is deterministic. Given the same text and parameters, the
//! output is byte-identical across runs and platforms. The crate uses
//! PCG32 for noise generation, with seeds derived via BLAKE3 hashing.
//!
//! # Example
//!
//! ```ignore
//! use morsewave_core::synthesize;
//!
//! // "OK" with the default sine carrier: "--- -.-" as audio.
//! let pcm = synthesize("OK", 0.05, 44100, 1000.0)?;
//! std::fs::write("ok.pcm", &pcm)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesize()`] - Main entry point for text-to-audio synthesis
//! - [`encode`] - Text to Morse fragment translation
//! - [`envelope`] - Linear fade-in/fade-out envelope
//! - [`note`] - Fragment to note sequencing
//! - [`oscillator`] - Basic waveform generators
//! - [`params`] - Synthesis parameters and waveform selection
//! - [`render`] - Sample rendering and quantization
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`symbols`] - The Morse alphabet table
//! - [`timing`] - Element durations derived from the dit

pub mod encode;
pub mod envelope;
pub mod error;
pub mod note;
pub mod oscillator;
pub mod params;
pub mod render;
pub mod result;
pub mod rng;
pub mod symbols;
pub mod synthesize;
pub mod timing;

// Re-export main types at crate root
pub use encode::encode;
pub use error::{MorseError, MorseResult};
pub use note::{sequence, Note, SoundKind};
pub use params::{SynthesisParams, Waveform};
pub use result::SynthesisResult;
pub use synthesize::{synthesize, synthesize_with_params};
pub use timing::Timing;
