use std::collections::VecDeque;

use noisy_cartpole::NoiseSource;

/// Returns the same draws forever, so a step can be computed by hand.
pub struct FixedNoise {
    pub normal: f64,
    /// Uniform draws land at `low + (high - low) * fraction`.
    pub fraction: f64,
}

impl FixedNoise {
    pub fn centered() -> Self {
        Self {
            normal: 0.0,
            fraction: 0.5,
        }
    }
}

impl NoiseSource for FixedNoise {
    fn reseed(&mut self, _seed: u64) {}

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.fraction
    }

    fn standard_normal(&mut self) -> f64 {
        self.normal
    }
}

/// Uniform draws come from a fixed script, ignoring the requested range.
/// Once the script runs out they fall back to the midpoint. Normals are 0.
pub struct ScriptedNoise {
    uniforms: VecDeque<f64>,
}

impl ScriptedNoise {
    pub fn new(uniforms: &[f64]) -> Self {
        Self {
            uniforms: uniforms.iter().copied().collect(),
        }
    }
}

impl NoiseSource for ScriptedNoise {
    fn reseed(&mut self, _seed: u64) {}

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.uniforms.pop_front().unwrap_or((low + high) / 2.0)
    }

    fn standard_normal(&mut self) -> f64 {
        0.0
    }
}
