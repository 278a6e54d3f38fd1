//! Synthesis result type.

/// Result of a synthesis run.
///
/// Samples are signed 8-bit values in note order. The PCM hash covers the
/// emitted byte form and is what byte-identity checks should compare.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Quantized samples, one signed byte each.
    pub samples: Vec<i8>,
    /// Sample rate the samples were rendered at, in Hz.
    pub sample_rate: u32,
    /// The Morse fragment string the input translated to.
    pub morse: String,
    /// Number of notes rendered.
    pub num_notes: usize,
    /// BLAKE3 hash of the emitted PCM bytes.
    pub pcm_hash: String,
}

impl SynthesisResult {
    /// Creates a result from rendered samples, hashing their byte form.
    pub fn from_samples(
        samples: Vec<i8>,
        sample_rate: u32,
        morse: String,
        num_notes: usize,
    ) -> Self {
        let pcm: Vec<u8> = samples.iter().map(|&s| s as u8).collect();
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

        Self {
            samples,
            sample_rate,
            morse,
            num_notes,
            pcm_hash,
        }
    }

    /// Returns the samples as raw unsigned bytes (two's-complement), the
    /// form an 8-bit signed PCM sink consumes.
    pub fn pcm_bytes(&self) -> Vec<u8> {
        self.samples.iter().map(|&s| s as u8).collect()
    }

    /// Number of samples.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_bytes_are_twos_complement() {
        let result =
            SynthesisResult::from_samples(vec![0, 127, -128, -1], 8000, String::new(), 0);
        assert_eq!(result.pcm_bytes(), vec![0, 127, 128, 255]);
    }

    #[test]
    fn test_hash_covers_the_byte_form() {
        let result = SynthesisResult::from_samples(vec![1, -2, 3], 8000, String::new(), 0);
        let expected = blake3::hash(&result.pcm_bytes()).to_hex().to_string();
        assert_eq!(result.pcm_hash, expected);
        assert_eq!(result.pcm_hash.len(), 64);
    }

    #[test]
    fn test_duration_seconds() {
        let result = SynthesisResult::from_samples(vec![0; 4000], 8000, String::new(), 1);
        assert!((result.duration_seconds() - 0.5).abs() < 1e-9);
        assert_eq!(result.num_samples(), 4000);
    }
}
