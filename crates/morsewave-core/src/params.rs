//! Synthesis parameters.

use serde::{Deserialize, Serialize};

use crate::error::{MorseError, MorseResult};
use crate::oscillator;

/// Carrier wave shape for tone notes.
///
/// The shape changes the timbre of the beeps and nothing else; timing,
/// envelope and quantization are identical across shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Square wave.
    Square,
    /// Triangle wave.
    Triangle,
    /// Sawtooth wave.
    Sawtooth,
}

impl Waveform {
    /// Samples the waveform at a phase measured in cycles.
    pub fn sample(&self, t: f64) -> f64 {
        match self {
            Waveform::Sine => oscillator::sine(t),
            Waveform::Square => oscillator::square(t),
            Waveform::Triangle => oscillator::triangle(t),
            Waveform::Sawtooth => oscillator::sawtooth(t),
        }
    }
}

impl std::str::FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "triangle" => Ok(Waveform::Triangle),
            "sawtooth" => Ok(Waveform::Sawtooth),
            _ => Err(format!(
                "unknown waveform '{}', expected 'sine', 'square', 'triangle' or 'sawtooth'",
                s
            )),
        }
    }
}

/// Parameters for a synthesis run.
///
/// The defaults follow common practice: a 50 ms dit (about 24 words per
/// minute), 44.1 kHz output and a 1 kHz carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisParams {
    /// Base dit duration in seconds; every other duration derives from it.
    #[serde(default = "default_dit_seconds")]
    pub dit_seconds: f64,
    /// Output sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Carrier frequency for tone notes, in Hz.
    #[serde(default = "default_carrier_freq")]
    pub carrier_freq: f64,
    /// Carrier wave shape.
    #[serde(default)]
    pub waveform: Waveform,
    /// Base seed for the noise burst RNG.
    #[serde(default)]
    pub seed: u32,
}

fn default_dit_seconds() -> f64 {
    0.05
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_carrier_freq() -> f64 {
    1000.0
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            dit_seconds: default_dit_seconds(),
            sample_rate: default_sample_rate(),
            carrier_freq: default_carrier_freq(),
            waveform: Waveform::default(),
            seed: 0,
        }
    }
}

impl SynthesisParams {
    /// Validates the parameters.
    ///
    /// # Errors
    /// Returns an error when the dit duration, sample rate or carrier
    /// frequency is not positive (or not finite). Nothing else is
    /// rejected; in particular the text to synthesize never is.
    pub fn validate(&self) -> MorseResult<()> {
        if !self.dit_seconds.is_finite() || self.dit_seconds <= 0.0 {
            return Err(MorseError::InvalidDitDuration {
                seconds: self.dit_seconds,
            });
        }
        if self.sample_rate == 0 {
            return Err(MorseError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.carrier_freq.is_finite() || self.carrier_freq <= 0.0 {
            return Err(MorseError::InvalidCarrierFrequency {
                freq: self.carrier_freq,
            });
        }
        Ok(())
    }
}
