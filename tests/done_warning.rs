use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

use noisy_cartpole::environment::Environment;
use noisy_cartpole::{CartPole, CartPoleConfig};

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn run_past_done(env: &mut CartPole, extra_steps: usize) {
    env.reset();
    let mut steps = 0;
    while !env.step(1).unwrap().done {
        steps += 1;
        assert!(steps < 1000, "constant push should topple the pole");
    }
    for _ in 0..extra_steps {
        env.step(1).unwrap();
    }
}

#[test]
fn stepping_after_done_warns_once_per_episode() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let config = CartPoleConfig {
            angle_noise: 0.0,
            ..Default::default()
        };
        let mut env = CartPole::with_seed(config, 42).unwrap();

        run_past_done(&mut env, 5);
        assert_eq!(env.steps_beyond_done(), Some(5));
        assert_eq!(warnings.load(Ordering::SeqCst), 1);

        // reset re-arms the warning
        run_past_done(&mut env, 5);
        assert_eq!(warnings.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn transition_step_does_not_warn() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let config = CartPoleConfig {
            angle_noise: 0.0,
            ..Default::default()
        };
        let mut env = CartPole::with_seed(config, 7).unwrap();
        run_past_done(&mut env, 0);
        assert_eq!(env.steps_beyond_done(), Some(0));
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 0);
}
