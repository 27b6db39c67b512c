use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::config::{CartPoleConfig, Params};
use crate::environment::{Environment, Frame, Info, Render, StepResult};
use crate::error::{EnvError, Result};
use crate::noise::{NoiseSource, SeededNoise, entropy_seed};
use crate::spaces::{BoxSpace, Discrete};

pub const VERSION: &str = "0.2.0";

/// 状态 [x, x_dot, theta, theta_dot]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct State {
    pub x: f64,
    pub x_dot: f64,
    pub theta: f64,
    pub theta_dot: f64,
}

impl State {
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.x_dot, self.theta, self.theta_dot]
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        let [x, x_dot, theta, theta_dot] = values;
        Self {
            x,
            x_dot,
            theta,
            theta_dot,
        }
    }
}

/// `np.sign`: zero stays zero, unlike `f64::signum`.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// CartPole with randomized actuator strength, jittered gravity and friction,
/// and multiplicative noise on the pole angle.
///
/// Each instance owns its random source and episode state. Callers that need
/// parallel simulations construct one instance per worker.
#[derive(Debug)]
pub struct CartPole<N: NoiseSource = SeededNoise> {
    config: CartPoleConfig,
    params: Params,
    noise: N,
    state: Option<State>,
    steps_beyond_done: Option<u64>,
}

impl CartPole<SeededNoise> {
    /// Seeded from system entropy.
    pub fn new(config: CartPoleConfig) -> Result<Self> {
        Self::with_seed(config, entropy_seed())
    }

    /// Fully deterministic: the seed fixes force_mag and every later draw.
    pub fn with_seed(config: CartPoleConfig, seed: u64) -> Result<Self> {
        debug!(seed, "seeding cartpole");
        Self::with_noise(config, SeededNoise::new(seed))
    }
}

impl<N: NoiseSource> CartPole<N> {
    /// Build on a caller-supplied source, used as given.
    pub fn with_noise(config: CartPoleConfig, mut noise: N) -> Result<Self> {
        config.validate()?;
        info!("CartPoleEnv - Version {VERSION}, Noise case: {}", config.case);

        let jitter = config.force_mag_jitter;
        let force_mag = config.force_mag * (1.0 + noise.uniform(-jitter, jitter));
        let params = Params::new(&config, force_mag);
        debug!(force_mag, "drew actuator strength");

        Ok(Self {
            config,
            params,
            noise,
            state: None,
            steps_beyond_done: None,
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn config(&self) -> &CartPoleConfig {
        &self.config
    }

    pub fn case(&self) -> i64 {
        self.config.case
    }

    pub fn state(&self) -> Option<State> {
        self.state
    }

    pub fn steps_beyond_done(&self) -> Option<u64> {
        self.steps_beyond_done
    }

    /// One explicit Euler slice with jittered gravity and friction.
    fn integrate(&mut self, state: State, action: i64) -> State {
        let p = &self.params;
        let State {
            x,
            x_dot,
            theta,
            theta_dot,
        } = state;

        let force = if action == 1 {
            p.force_mag
        } else {
            -p.force_mag
        };
        let costheta = theta.cos();
        let sintheta = theta.sin();

        // draw order: cart friction, gravity, pole friction, then angle noise
        let cart_scale = p.noise_scale + p.frictioncart_eps * self.noise.standard_normal();
        let gravity_scale = p.noise_scale + p.gravity_eps * self.noise.standard_normal();
        let pole_scale = p.noise_scale + p.frictionpole_eps * self.noise.standard_normal();

        let temp = (force + p.polemass_length * theta_dot * theta_dot * sintheta
            - p.friction_cart * cart_scale * sign(x_dot))
            / p.total_mass;
        let theta_acc = (p.gravity * gravity_scale * sintheta
            - costheta * temp
            - p.friction_pole * pole_scale * theta_dot / p.polemass_length)
            / (p.length * (4.0 / 3.0 - p.masspole * costheta * costheta / p.total_mass));
        let x_acc = temp - p.polemass_length * theta_acc * costheta / p.total_mass;

        let angle_noise = self.noise.uniform(-p.angle_noise, p.angle_noise);

        State {
            x: x + p.tau * x_dot,
            x_dot: x_dot + p.tau * x_acc,
            theta: (theta + p.tau * theta_dot) * (1.0 + angle_noise),
            theta_dot: theta_dot + p.tau * theta_acc,
        }
    }

    fn reward(&mut self, done: bool) -> f64 {
        if !done {
            return 1.0;
        }
        match self.steps_beyond_done {
            None => {
                // 杆刚倒下
                self.steps_beyond_done = Some(0);
                1.0
            }
            Some(n) => {
                if n == 0 {
                    warn!(
                        "You are calling 'step()' even though this environment has already \
                         returned done = True. You should always call 'reset()' once you \
                         receive 'done = True' -- any further steps are undefined behavior."
                    );
                }
                self.steps_beyond_done = Some(n + 1);
                0.0
            }
        }
    }
}

impl<N: NoiseSource> Environment for CartPole<N> {
    type Observation = [f64; 4];
    type Action = i64; // 0: left, 1: right

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(entropy_seed);
        self.noise.reseed(seed);
        debug!(seed, "reseeded cartpole");
        seed
    }

    fn reset(&mut self) -> Self::Observation {
        let r = self.config.init_range;
        let state = State {
            x: self.noise.uniform(-r, r),
            x_dot: self.noise.uniform(-r, r),
            theta: self.noise.uniform(-r, r),
            theta_dot: self.noise.uniform(-r, r),
        };
        self.state = Some(state);
        self.steps_beyond_done = None;
        debug!(?state, "reset");
        state.to_array()
    }

    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>> {
        let space = self.action_space();
        if !space.contains(action) {
            return Err(EnvError::InvalidAction { action, n: space.n });
        }
        let state = self.state.ok_or(EnvError::NotReset)?;

        let next = self.integrate(state, action);
        self.state = Some(next);

        let done = self.params.is_terminal(next.x, next.theta);
        let reward = self.reward(done);
        trace!(?next, reward, done, "step");

        Ok(StepResult {
            observation: next.to_array(),
            reward,
            done,
            info: Info::default(),
        })
    }

    fn current_state(&self) -> Option<Self::Observation> {
        self.state.map(|s| s.to_array())
    }

    fn action_space(&self) -> Discrete {
        Discrete::new(2)
    }

    fn observation_space(&self) -> BoxSpace {
        // 角度上限取阈值的两倍，使失败时的观测仍在界内
        BoxSpace::symmetric([
            self.params.x_threshold * 2.0,
            f32::MAX as f64,
            self.params.theta_threshold_radians * 2.0,
            f32::MAX as f64,
        ])
    }
}

impl<N: NoiseSource> Render for CartPole<N> {
    fn render(&self) -> Option<Frame> {
        self.state.map(|s| Frame {
            cart_position: s.x,
            pole_angle: s.theta,
            track_half_width: self.params.x_threshold,
        })
    }
}
