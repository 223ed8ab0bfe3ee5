//! Gaussian noise source with deterministic seeding support.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Additive noise generator for sensor readings.
///
/// A seed of 0 draws the generator state from OS entropy; any other seed
/// gives a reproducible sequence.
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    rng: ChaCha8Rng,
}

impl NoiseGenerator {
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            ChaCha8Rng::from_os_rng()
        } else {
            ChaCha8Rng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Sample `N(0, stddev^2)`. A zero stddev yields exactly zero so that a
    /// noise-free sensor reports unperturbed readings.
    pub fn gaussian(&mut self, stddev: f64) -> f64 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f64 = self.rng.sample(StandardNormal);
        n * stddev
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
