//! Self-terminating load test over the rotation engine

use rand::seq::SliceRandom;
use ringlog_core::{Error, LoggerConfig, Result};
use tracing::info;

use crate::capacity::RotationState;
use crate::engine::RotationEngine;
use crate::listener::spawn_listener;

/// Messages a trial draws from at random
pub const RANDOM_MESSAGES: &[&str] = &[
    "THING HAS HAPPENED",
    "STUFF HAS HAPPENED",
    "EVERYTHING IS BROKEN",
];

/// What a trial writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialMessages {
    /// The same message every time
    Fixed(String),
    /// A random pick from [`RANDOM_MESSAGES`] per line
    Random,
}

impl Default for TrialMessages {
    fn default() -> Self {
        TrialMessages::Fixed("Test".to_string())
    }
}

impl TrialMessages {
    fn next(&self) -> String {
        match self {
            TrialMessages::Fixed(msg) => msg.clone(),
            TrialMessages::Random => RANDOM_MESSAGES
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Log `count` messages and stop once every one of them has been handled.
///
/// Fails with [`Error::InvalidTrialCount`] before touching any file if
/// `count` is not positive.
pub async fn run_trial(
    config: LoggerConfig,
    count: i64,
    messages: TrialMessages,
) -> Result<RotationState> {
    let target = match usize::try_from(count) {
        Ok(n) if n > 0 => n,
        _ => return Err(Error::InvalidTrialCount(count)),
    };

    info!("Starting trial of {} messages", target);
    let (sender, task) = spawn_listener(RotationEngine::new(config), Some(target));

    for _ in 0..target {
        sender.send(messages.next()).await?;
    }
    drop(sender);

    let state = task.await.map_err(|_| Error::ListenerStopped)?;
    info!("Done");
    Ok(state)
}
