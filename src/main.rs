//! Runs the noisy CartPole with uniformly random actions and reports
//! per-episode results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use noisy_cartpole::rollout::run_episodes;
use noisy_cartpole::utils::plot_episode_returns;
use noisy_cartpole::{CartPole, CartPoleConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Random-action rollouts of the noisy CartPole")]
struct Args {
    /// Environment seed; drawn from system entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 10)]
    episodes: usize,

    /// Episodes longer than this are truncated
    #[arg(long, default_value_t = 500)]
    max_steps: usize,

    /// Noise case, overrides the config file
    #[arg(long)]
    case: Option<i64>,

    /// JSON file with CartPoleConfig overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write an SVG chart of episode returns
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Print each episode summary as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CartPoleConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CartPoleConfig::default(),
    };
    if let Some(case) = args.case {
        config = config.with_case(case);
    }

    let seed = args.seed.unwrap_or_else(noisy_cartpole::noise::entropy_seed);
    let mut env = CartPole::with_seed(config, seed)?;
    tracing::info!(seed, force_mag = env.params().force_mag, "environment ready");

    // 动作采样与环境噪声使用不同的随机源
    let mut action_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let summaries = run_episodes(&mut env, args.episodes, args.max_steps, |_| {
        action_rng.random_range(0..2)
    })?;

    for (episode, summary) in summaries.iter().enumerate() {
        if args.json {
            println!("{}", serde_json::to_string(summary)?);
        } else {
            tracing::info!(
                "Episode {episode}: steps = {}, total reward = {}, terminated = {}",
                summary.steps,
                summary.total_reward,
                summary.terminated
            );
        }
    }

    let returns: Vec<f64> = summaries.iter().map(|s| s.total_reward).collect();
    if !returns.is_empty() {
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        tracing::info!("Mean return over {} episodes: {mean:.2}", returns.len());
    }

    if let Some(path) = &args.plot {
        plot_episode_returns(&returns, path, "Random-action CartPole")?;
    }

    Ok(())
}
