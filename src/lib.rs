//! CartPole with randomized actuator strength, jittered gravity and friction,
//! and a noisy pole-angle update, behind a gym-style reset/step interface.

// detailed implementation
pub mod config;
pub mod environments;
pub mod error;
pub mod noise;
pub mod rollout;
pub mod spaces;
pub mod utils;

// Traits
pub mod environment;

pub use config::{CartPoleConfig, Params};
pub use environment::{Environment, Frame, Info, Render, StepResult};
pub use environments::{CartPole, State};
pub use error::{EnvError, Result};
pub use noise::{NoiseSource, SeededNoise};
