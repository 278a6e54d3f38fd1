//! Error types for Morse synthesis.

use thiserror::Error;

/// Result type for synthesis operations.
pub type MorseResult<T> = Result<T, MorseError>;

/// Errors that can occur during Morse audio synthesis.
///
/// Untranslatable input characters are never an error; they degrade to an
/// audible noise burst so the pipeline keeps moving. Only configuration
/// values that make synthesis meaningless are rejected.
#[derive(Debug, Error)]
pub enum MorseError {
    /// Invalid dit duration.
    #[error("invalid dit duration: {seconds} seconds")]
    InvalidDitDuration {
        /// The rejected duration.
        seconds: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Invalid carrier frequency.
    #[error("invalid carrier frequency: {freq} Hz")]
    InvalidCarrierFrequency {
        /// The rejected frequency.
        freq: f64,
    },
}
