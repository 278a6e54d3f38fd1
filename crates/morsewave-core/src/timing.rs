//! Morse timing model.
//!
//! Every duration derives from the dit. The ratios follow standard Morse
//! practice: a dah and the silence between letters are three dits, the
//! silence between words is seven, and each fragment trails one dit of
//! silence. The error burst for untranslatable characters runs five dits.

use crate::error::{MorseError, MorseResult};

/// The six durations, in seconds, that drive note sequencing.
///
/// Constructed once via [`Timing::from_dit`] and read-only afterwards;
/// only the dit is free, the rest are fixed multiples of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Duration of a short beep.
    pub dit: f64,
    /// Duration of a long beep (3 dits).
    pub dah: f64,
    /// Silence between letters (3 dits).
    pub letter_pause: f64,
    /// Silence between words (7 dits).
    pub word_pause: f64,
    /// Silence appended after every fragment (1 dit).
    pub fragment_pause: f64,
    /// Duration of the error burst (5 dits).
    pub error: f64,
}

impl Timing {
    /// Derives the full timing model from a base dit duration.
    ///
    /// # Errors
    /// Returns [`MorseError::InvalidDitDuration`] unless `dit` is a
    /// positive finite number of seconds.
    pub fn from_dit(dit: f64) -> MorseResult<Self> {
        if !dit.is_finite() || dit <= 0.0 {
            return Err(MorseError::InvalidDitDuration { seconds: dit });
        }
        Ok(Self {
            dit,
            dah: 3.0 * dit,
            letter_pause: 3.0 * dit,
            word_pause: 7.0 * dit,
            fragment_pause: dit,
            error: 5.0 * dit,
        })
    }
}
