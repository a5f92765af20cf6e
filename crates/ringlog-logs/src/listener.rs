//! Ingestion loop and producer handles

use ringlog_core::{constants, Error, LogValue, LoggerConfig, Result};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::capacity::RotationState;
use crate::engine::RotationEngine;

/// Events consumed by the listener, in the order producers enqueued them
#[derive(Debug)]
enum Command {
    Log {
        message: String,
        accepted: oneshot::Sender<()>,
    },
    Shutdown,
}

/// A bounded, self-rotating logger. Each [`start`](Self::start) runs an
/// independent listener with its own rotation state.
#[derive(Debug, Clone)]
pub struct RotatingLogger {
    config: LoggerConfig,
}

impl RotatingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Spawn the listener on the current tokio runtime
    pub fn start(&self) -> (LogSender, ShutdownHandle) {
        let (sender, task) = spawn_listener(RotationEngine::new(self.config.clone()), None);
        let shutdown = ShutdownHandle {
            tx: sender.tx.clone(),
            task,
        };
        (sender, shutdown)
    }
}

/// Producer side of a running listener. Cheap to clone.
#[derive(Debug, Clone)]
pub struct LogSender {
    tx: mpsc::Sender<Command>,
}

impl LogSender {
    /// Hand a message to the listener.
    ///
    /// Returns once the listener has taken the message, not once it is on
    /// disk. Write failures are never reported here. Line breaks inside the
    /// message are escaped, so it always counts as one line.
    pub async fn send(&self, value: impl Into<LogValue>) -> Result<()> {
        let value: LogValue = value.into();
        let (accepted, taken) = oneshot::channel();
        let command = Command::Log {
            message: value.to_string(),
            accepted,
        };

        self.tx.send(command).await.map_err(|_| Error::ListenerStopped)?;
        taken.await.map_err(|_| Error::ListenerStopped)
    }

    /// Send each value as its own line, in order
    pub async fn send_all<I, V>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<LogValue>,
    {
        for value in values {
            self.send(value).await?;
        }
        Ok(())
    }
}

/// Stops a running listener
#[derive(Debug)]
pub struct ShutdownHandle {
    tx: mpsc::Sender<Command>,
    task: JoinHandle<RotationState>,
}

impl ShutdownHandle {
    /// Request shutdown and wait until the listener has stopped.
    ///
    /// Messages enqueued before the request are still written; producers
    /// still waiting afterwards get [`Error::ListenerStopped`]. Returns the
    /// final rotation state, which is discarded with the listener.
    pub async fn shutdown(self) -> Result<RotationState> {
        // A closed queue means the listener is already gone; joining still
        // yields its final state.
        let _ = self.tx.send(Command::Shutdown).await;
        self.task.await.map_err(|_| Error::ListenerStopped)
    }
}

/// Spawn a listener task owning `engine`.
///
/// With `stop_after`, the listener stops itself once that many messages
/// have been handled (persisted or dropped).
pub(crate) fn spawn_listener(
    engine: RotationEngine,
    stop_after: Option<usize>,
) -> (LogSender, JoinHandle<RotationState>) {
    let (tx, rx) = mpsc::channel(constants::COMMAND_QUEUE_CAPACITY);
    let task = tokio::spawn(listen(engine, rx, stop_after));
    (LogSender { tx }, task)
}

async fn listen(
    mut engine: RotationEngine,
    mut rx: mpsc::Receiver<Command>,
    stop_after: Option<usize>,
) -> RotationState {
    info!("Listening for logs");

    while let Some(command) = rx.recv().await {
        match command {
            Command::Log { message, accepted } => {
                // The producer may have given up waiting; the message still counts.
                let _ = accepted.send(());
                engine.ingest(&message);

                if let Some(target) = stop_after {
                    let state = engine.state();
                    if state.persisted(engine.config()) + state.dropped >= target {
                        info!("Trial finished after {} messages", target);
                        break;
                    }
                }
            }
            Command::Shutdown => {
                info!("Exit invoked, log listener stopping");
                break;
            }
        }
    }

    debug!("Log listener stopped: {:?}", engine.state());
    engine.state()
}
