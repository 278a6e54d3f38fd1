//! Attack/release envelope for click-free note boundaries.
//!
//! Every note, pauses and noise bursts included, is shaped by a short
//! linear fade at both ends. Without the fade, the step between a tone and
//! the silence after it is audible as a click.

/// Longest fade applied to either end of a note, in seconds.
const MAX_FADE_SECONDS: f64 = 0.01;

/// Returns the amplitude multiplier at a point within a note.
///
/// `elapsed` is the time since the note started and `duration` the note's
/// total length, both in seconds. The multiplier ramps linearly from 0
/// over the fade window, holds at 1.0, and ramps back down to 0 over the
/// final window. The window is 10 ms, shortened to half the note for
/// short notes so the two ramps never overlap.
pub fn gain(elapsed: f64, duration: f64) -> f64 {
    let fade = MAX_FADE_SECONDS.min(duration / 2.0);
    let remaining = duration - elapsed;
    if elapsed < fade {
        elapsed / fade
    } else if remaining < fade {
        remaining / fade
    } else {
        1.0
    }
}
