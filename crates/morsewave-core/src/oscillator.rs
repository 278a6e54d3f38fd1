//! Basic waveform generators.
//!
//! Each periodic generator is a pure function of phase measured in cycles:
//! 0.0 is the start of a cycle and 1.0 the start of the next. Outputs stay
//! in [-1.0, 1.0]. Noise is the one stateful generator and draws from the
//! deterministic RNG instead of a phase.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

/// Sine wave.
pub fn sine(t: f64) -> f64 {
    (TAU * t).sin()
}

/// Square wave: -1 over the first half of each cycle, +1 over the second.
pub fn square(t: f64) -> f64 {
    if t.fract() < 0.5 {
        -1.0
    } else {
        1.0
    }
}

/// Triangle wave: ramps from -1 up to +1 over the first half of each
/// cycle and back down over the second.
pub fn triangle(t: f64) -> f64 {
    let phase = t.fract();
    if phase < 0.5 {
        4.0 * phase - 1.0
    } else {
        -4.0 * phase + 3.0
    }
}

/// Sawtooth wave: ramps from -1 to +1 over each cycle.
pub fn sawtooth(t: f64) -> f64 {
    2.0 * t.fract() - 1.0
}

/// One sample of uniform white noise in [-1.0, 1.0].
pub fn white_noise(rng: &mut Pcg32) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_sine_landmarks() {
        assert!(sine(0.0).abs() < 1e-12);
        assert!((sine(0.25) - 1.0).abs() < 1e-12);
        assert!(sine(0.5).abs() < 1e-12);
        assert!((sine(0.75) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_halves() {
        assert_eq!(square(0.0), -1.0);
        assert_eq!(square(0.49), -1.0);
        assert_eq!(square(0.5), 1.0);
        assert_eq!(square(0.99), 1.0);
    }

    #[test]
    fn test_triangle_landmarks() {
        assert_eq!(triangle(0.0), -1.0);
        assert!((triangle(0.25)).abs() < 1e-12);
        assert_eq!(triangle(0.5), 1.0);
        assert!((triangle(0.75)).abs() < 1e-12);
    }

    #[test]
    fn test_sawtooth_ramp() {
        assert_eq!(sawtooth(0.0), -1.0);
        assert_eq!(sawtooth(0.25), -0.5);
        assert_eq!(sawtooth(0.5), 0.0);
        assert!((sawtooth(0.999) - 0.998).abs() < 1e-12);
    }

    #[test]
    fn test_periodicity() {
        for t in [0.1, 0.37, 0.62, 0.9] {
            assert!((sine(t) - sine(t + 3.0)).abs() < 1e-9);
            assert_eq!(square(t), square(t + 3.0));
            assert!((triangle(t) - triangle(t + 3.0)).abs() < 1e-9);
            assert!((sawtooth(t) - sawtooth(t + 3.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_outputs_stay_in_range() {
        for i in 0..1000 {
            let t = i as f64 * 0.0137;
            for value in [sine(t), square(t), triangle(t), sawtooth(t)] {
                assert!((-1.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_white_noise_range() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let value = white_noise(&mut rng);
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_white_noise_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<f64> = (0..100).map(|_| white_noise(&mut rng1)).collect();
        let values2: Vec<f64> = (0..100).map(|_| white_noise(&mut rng2)).collect();

        assert_eq!(values1, values2);
    }
}
