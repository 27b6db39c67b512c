//! Random source consumed by the dynamics.
//!
//! The environment never touches a global generator: every draw (initial
//! state, actuator strength, per-step jitter) goes through a [`NoiseSource`]
//! owned by the instance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait NoiseSource {
    /// Restart the draw sequence from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Sample from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Sample from N(0, 1).
    fn standard_normal(&mut self) -> f64;
}

/// Default source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random::<f64>() * (high - low) + low
    }

    fn standard_normal(&mut self) -> f64 {
        // Box-Muller; u1 in (0, 1] keeps ln finite
        let u1 = 1.0 - self.rng.random::<f64>();
        let u2 = self.rng.random::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

/// System-chosen seed for callers that do not supply one.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}
