use serde::Serialize;
use tracing::debug;

use crate::environment::Environment;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary<O> {
    pub steps: usize,
    pub total_reward: f64,
    /// `false` when the episode was cut off by `max_steps`.
    pub terminated: bool,
    pub final_observation: O,
}

/// 运行一个 episode，动作由调用方给出
pub fn run_episode<E, F>(
    env: &mut E,
    max_steps: usize,
    mut choose_action: F,
) -> Result<EpisodeSummary<E::Observation>>
where
    E: Environment,
    F: FnMut(&E::Observation) -> E::Action,
{
    let mut observation = env.reset();
    let mut total_reward = 0.0;
    let mut steps = 0;
    let mut terminated = false;

    while steps < max_steps {
        let action = choose_action(&observation);
        let result = env.step(action)?;
        observation = result.observation;
        total_reward += result.reward;
        steps += 1;
        if result.done {
            terminated = true;
            break;
        }
    }

    Ok(EpisodeSummary {
        steps,
        total_reward,
        terminated,
        final_observation: observation,
    })
}

pub fn run_episodes<E, F>(
    env: &mut E,
    episodes: usize,
    max_steps: usize,
    mut choose_action: F,
) -> Result<Vec<EpisodeSummary<E::Observation>>>
where
    E: Environment,
    F: FnMut(&E::Observation) -> E::Action,
{
    let mut summaries = Vec::with_capacity(episodes);
    for episode in 0..episodes {
        let summary = run_episode(env, max_steps, &mut choose_action)?;
        debug!(
            episode,
            steps = summary.steps,
            total_reward = summary.total_reward,
            "episode finished"
        );
        summaries.push(summary);
    }
    Ok(summaries)
}
