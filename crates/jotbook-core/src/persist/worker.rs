//! Background writer for root snapshots
//!
//! One task owns the durable store. Snapshots arrive over an unbounded channel
//! in dispatch order; a burst is coalesced so only the newest is written.
//! Flush requests are answered once every snapshot queued before them has been
//! handled.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use super::{KeyValueStore, PersistStatus};
use crate::error::{Error, Result};

enum Command {
    Write(Vec<u8>),
    Flush(oneshot::Sender<Result<()>>),
}

/// Sending side held by the container
#[derive(Debug)]
pub(crate) struct PersistHandle {
    commands: mpsc::UnboundedSender<Command>,
    status: watch::Receiver<PersistStatus>,
    task: JoinHandle<()>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write(bytes) => write!(formatter, "Write({} bytes)", bytes.len()),
            Self::Flush(_) => formatter.write_str("Flush"),
        }
    }
}

/// Start the writer task for `key` on the current tokio runtime
pub(crate) fn spawn<S: KeyValueStore>(
    backend: S,
    key: String,
    initial: PersistStatus,
) -> PersistHandle {
    let (commands, receiver) = mpsc::unbounded_channel();
    let (status_tx, status) = watch::channel(initial);
    let worker = Worker {
        backend,
        key,
        commands: receiver,
        status: status_tx,
        writes: 0,
        attempts: 0,
    };
    let task = tokio::spawn(worker.run());
    PersistHandle {
        commands,
        status,
        task,
    }
}

impl PersistHandle {
    /// Queue a snapshot. Never blocks.
    pub(crate) fn enqueue(&self, bytes: Vec<u8>) {
        if self.commands.send(Command::Write(bytes)).is_err() {
            tracing::warn!("Persistence worker stopped; snapshot not queued");
        }
    }

    /// Wait for everything queued so far and report the last write's outcome
    pub(crate) async fn flush(&self) -> Result<()> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Flush(reply))
            .map_err(|_| Error::Persistence("persistence worker stopped".to_string()))?;
        response
            .await
            .map_err(|_| Error::Persistence("persistence worker stopped".to_string()))?
    }

    pub(crate) fn status(&self) -> watch::Receiver<PersistStatus> {
        self.status.clone()
    }

    /// Drain the queue and stop the task
    pub(crate) async fn shutdown(self) {
        drop(self.commands);
        if let Err(error) = self.task.await {
            tracing::warn!("Persistence worker ended abnormally: {}", error);
        }
    }
}

struct Worker<S> {
    backend: S,
    key: String,
    commands: mpsc::UnboundedReceiver<Command>,
    status: watch::Sender<PersistStatus>,
    writes: u64,
    attempts: u32,
}

impl<S: KeyValueStore> Worker<S> {
    async fn run(mut self) {
        tracing::debug!("Persistence worker started for '{}'", self.key);
        let mut deferred: Option<Command> = None;

        loop {
            let command = match deferred.take() {
                Some(command) => command,
                None => match self.commands.recv().await {
                    Some(command) => command,
                    None => break,
                },
            };

            match command {
                Command::Write(mut bytes) => {
                    let mut coalesced = 0_usize;
                    while let Ok(next) = self.commands.try_recv() {
                        match next {
                            Command::Write(newer) => {
                                bytes = newer;
                                coalesced += 1;
                            }
                            other => {
                                deferred = Some(other);
                                break;
                            }
                        }
                    }
                    if coalesced > 0 {
                        tracing::debug!("Coalesced {} queued snapshots", coalesced);
                    }
                    self.write(bytes).await;
                }
                Command::Flush(reply) => {
                    let _ = reply.send(self.last_outcome());
                }
            }
        }

        tracing::debug!("Persistence worker for '{}' stopped", self.key);
    }

    async fn write(&mut self, bytes: Vec<u8>) {
        let size = bytes.len();
        match self.backend.set(&self.key, bytes).await {
            Ok(()) => {
                self.writes += 1;
                self.attempts = 0;
                tracing::debug!("Persisted snapshot ({} bytes) to '{}'", size, self.key);
                self.status.send_replace(PersistStatus::Saved {
                    writes: self.writes,
                });
            }
            Err(error) => {
                self.attempts += 1;
                tracing::warn!(
                    "Failed to persist snapshot to '{}' (attempt {}): {}",
                    self.key,
                    self.attempts,
                    error
                );
                self.status.send_replace(PersistStatus::Failed {
                    error: error.to_string(),
                    attempts: self.attempts,
                });
            }
        }
    }

    fn last_outcome(&self) -> Result<()> {
        match &*self.status.borrow() {
            PersistStatus::Failed { error, .. } => Err(Error::Persistence(error.clone())),
            PersistStatus::Held { error } => Err(Error::Persistence(format!(
                "writes held after failed read: {error}"
            ))),
            PersistStatus::Idle | PersistStatus::Saved { .. } => Ok(()),
        }
    }
}
