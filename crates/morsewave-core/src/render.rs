//! Sample rendering and quantization.
//!
//! Rendering walks the note sequence in order. Each note contributes
//! `floor(duration * sample_rate)` samples; within a note the carrier
//! phase advances by the carrier frequency while the fade envelope tracks
//! wall-clock time. Note buffers are concatenated with no smoothing beyond
//! the envelope itself.

use rand_pcg::Pcg32;

use crate::envelope;
use crate::note::{Note, SoundKind};
use crate::oscillator;
use crate::params::Waveform;

/// Quantizes a value in [-1.0, 1.0] to a signed 8-bit sample.
///
/// The value is scaled by 128 and truncated toward zero; 1.0 saturates to
/// 127 and -1.0 maps to -128. Out-of-range input saturates as well.
pub fn quantize(value: f64) -> i8 {
    (value * 128.0) as i8
}

/// Renders a single note into quantized samples.
///
/// The RNG only advances for noise notes, so tone and pause rendering is
/// independent of the seed.
pub fn render_note(
    note: Note,
    waveform: Waveform,
    sample_rate: f64,
    carrier_freq: f64,
    rng: &mut Pcg32,
) -> Vec<i8> {
    let total_samples = (note.duration * sample_rate) as usize;
    let samples_per_cycle = sample_rate / carrier_freq;

    let mut samples = Vec::with_capacity(total_samples);
    for i in 0..total_samples {
        let value = match note.kind {
            SoundKind::Tone => waveform.sample(i as f64 / samples_per_cycle),
            SoundKind::Pause => 0.0,
            SoundKind::Noise => oscillator::white_noise(rng),
        };
        let elapsed = i as f64 / sample_rate;
        samples.push(quantize(value * envelope::gain(elapsed, note.duration)));
    }
    samples
}

/// Renders a whole note sequence into one contiguous sample buffer.
pub fn render(
    notes: &[Note],
    waveform: Waveform,
    sample_rate: f64,
    carrier_freq: f64,
    rng: &mut Pcg32,
) -> Vec<i8> {
    let mut samples = Vec::new();
    for &note in notes {
        samples.extend(render_note(note, waveform, sample_rate, carrier_freq, rng));
    }
    samples
}
