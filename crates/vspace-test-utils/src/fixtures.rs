//! Seeded value generators.
//!
//! Every generator is driven by `ChaCha8Rng` so a failing test reproduces
//! from its seed alone.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` values uniform in `[-scale, scale)`.
pub fn seeded_values(seed: u64, len: usize, scale: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-scale..scale)).collect()
}

/// [`seeded_values`] narrowed to single precision.
pub fn seeded_values_f32(seed: u64, len: usize, scale: f64) -> Vec<f32> {
    seeded_values(seed, len, scale)
        .into_iter()
        .map(|v| v as f32)
        .collect()
}

/// A non-zero coefficient in `[-scale, scale]` that is neither `1` nor `-1`.
pub fn seeded_coefficient(seed: u64, scale: f64) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    loop {
        let c: f64 = rng.random_range(-scale..=scale);
        if c != 0.0 && c != 1.0 && c != -1.0 {
            return c;
        }
    }
}
