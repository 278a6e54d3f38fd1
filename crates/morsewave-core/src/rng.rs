//! Deterministic RNG with BLAKE3 seed derivation.
//!
//! The noise burst is the pipeline's only source of randomness, and it
//! draws from a PCG32 stream seeded here. Fixing the seed therefore makes
//! the whole synthesis byte-reproducible.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 generator from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit state PCG32
/// expects.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a named component.
///
/// Hashes the base seed (little-endian bytes) together with the key, so
/// components seeded from the same base draw from unrelated streams.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}
