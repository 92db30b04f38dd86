//! Root state container
//!
//! A [`Store`] is built once at startup and handed to the presentation layer.
//! Dispatches apply synchronously and are visible to [`Store::snapshot`]
//! immediately; subscribers are woken through a `watch` channel. Every change
//! to a persisted slice queues a snapshot for the background writer, in
//! dispatch order.


use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::StoreConfig;
use crate::db::LibSqlStore;
use crate::error::Result;
use crate::forms::{EntryDraft, FormError};
use crate::models::{Credentials, EntryId, JournalEntry, SignupProfile, ThemeMode};
use crate::persist::snapshot::{self, PersistPolicy};
use crate::persist::{self, KeyValueStore, MemoryStore, PersistHandle, PersistStatus};
use crate::state::{Action, Dispatched, RootState};
use crate::theme::{Palette, SystemAppearance};

/// The single owner of [`RootState`]
#[derive(Debug)]
pub struct Store {
    state: watch::Sender<Arc<RootState>>,
    policy: PersistPolicy,
    persister: PersistHandle,
    // Set when the startup read failed; cleared by `retry_persist`
    writes_held: AtomicBool,
}

impl Store {
    /// Rehydrate from `backend` and start the persistence worker.
    ///
    /// Unreadable data is logged and the affected slices start from
    /// defaults. If the read itself fails, every slice starts from defaults
    /// and writes are held (reported as [`PersistStatus::Held`]) so the
    /// stored blob is not overwritten until [`Store::retry_persist`].
    /// Must be called inside a tokio runtime.
    pub async fn open<S: KeyValueStore>(backend: S, config: &StoreConfig) -> Result<Self> {
        let policy = PersistPolicy::from_config(config);

        let mut status = PersistStatus::Idle;
        let initial = match backend.get(&policy.key).await {
            Ok(Some(bytes)) => {
                let rehydrated = snapshot::decode(&bytes, &policy);
                tracing::info!(
                    "Restored {} slice(s) from '{}'",
                    rehydrated.restored.len(),
                    policy.key
                );
                rehydrated.state
            }
            Ok(None) => {
                tracing::info!("No persisted state under '{}'", policy.key);
                RootState::default()
            }
            Err(error) => {
                tracing::warn!(
                    "Failed to read persisted state under '{}', holding writes: {}",
                    policy.key,
                    error
                );
                status = PersistStatus::Held {
                    error: error.to_string(),
                };
                RootState::default()
            }
        };

        let writes_held = AtomicBool::new(status.is_held());
        let persister = persist::spawn(backend, policy.key.clone(), status);
        let (state, _) = watch::channel(Arc::new(initial));

        Ok(Self {
            state,
            policy,
            persister,
            writes_held,
        })
    }

    /// Open against the libSQL database named by `config`
    pub async fn open_local(config: &StoreConfig) -> Result<Self> {
        let backend = LibSqlStore::open(config.resolved_database_path()).await?;
        Self::open(backend, config).await
    }

    /// A fresh container backed by process memory
    pub async fn in_memory() -> Result<Self> {
        Self::open(MemoryStore::new(), &StoreConfig::default()).await
    }

    /// Apply `action`. Total: the container never rejects an action.
    pub fn dispatch(&self, action: Action) -> Dispatched {
        let name = action.name();
        let slice = action.slice();
        let mut outcome = Dispatched::NotFound;

        self.state.send_if_modified(|state| {
            let mut next = RootState::clone(&**state);
            outcome = next.reduce(action);
            if !outcome.is_applied() {
                return false;
            }
            if self.policy.persists(slice) && !self.writes_held.load(Ordering::Acquire) {
                // Encoded under the channel lock so snapshots queue in dispatch order
                if let Err(error) = self.enqueue_snapshot(&next) {
                    tracing::warn!("Failed to encode snapshot: {}", error);
                }
            }
            *state = Arc::new(next);
            true
        });

        tracing::debug!(action = name, outcome = ?outcome, "dispatched");
        outcome
    }

    pub fn add_entry(&self, entry: JournalEntry) -> Dispatched {
        self.dispatch(Action::AddEntry(entry))
    }

    pub fn update_entry(&self, entry: JournalEntry) -> Dispatched {
        self.dispatch(Action::UpdateEntry(entry))
    }

    pub fn delete_entry(&self, id: EntryId) -> Dispatched {
        self.dispatch(Action::DeleteEntry(id))
    }

    pub fn set_theme(&self, mode: ThemeMode) -> Dispatched {
        self.dispatch(Action::SetTheme(mode))
    }

    pub fn login(&self, credentials: Credentials) -> Dispatched {
        self.dispatch(Action::Login(credentials))
    }

    pub fn signup(&self, profile: SignupProfile) -> Dispatched {
        self.dispatch(Action::Signup(profile))
    }

    pub fn logout(&self) -> Dispatched {
        self.dispatch(Action::Logout)
    }

    /// Save a write-screen draft as a new entry or an edit
    pub fn save_draft(&self, draft: EntryDraft) -> std::result::Result<Dispatched, FormError> {
        Ok(self.dispatch(draft.compose()?))
    }

    /// Current state
    pub fn snapshot(&self) -> Arc<RootState> {
        self.state.borrow().clone()
    }

    /// Receiver woken after every state-changing dispatch
    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.state.subscribe()
    }

    /// Palette for the current theme under the host's current preference
    pub fn palette(&self, appearance: &impl SystemAppearance) -> &'static Palette {
        self.state.borrow().theme.palette(appearance)
    }

    /// Wait for queued writes and report the last write's outcome
    pub async fn flush(&self) -> Result<()> {
        self.persister.flush().await
    }

    /// Receiver tracking the background writer's health
    pub fn persist_status(&self) -> watch::Receiver<PersistStatus> {
        self.persister.status()
    }

    /// Queue the current state again, e.g. after a failed write.
    ///
    /// Also releases writes held after a failed startup read; the current
    /// state then replaces whatever is stored.
    pub fn retry_persist(&self) -> Result<()> {
        let mut queued = Ok(());
        // Encoded under the channel lock, like dispatch, so snapshots stay in order
        self.state.send_if_modified(|state| {
            if self.writes_held.swap(false, Ordering::AcqRel) {
                tracing::info!("Releasing held writes for '{}'", self.policy.key);
            }
            queued = self.enqueue_snapshot(&**state);
            false
        });
        tracing::debug!("Re-queued snapshot for '{}'", self.policy.key);
        queued
    }

    fn enqueue_snapshot(&self, state: &RootState) -> Result<()> {
        let bytes = snapshot::encode(state, &self.policy)?;
        self.persister.enqueue(bytes);
        Ok(())
    }

    /// Flush, then stop the writer
    pub async fn close(self) -> Result<()> {
        let flushed = self.persister.flush().await;
        self.persister.shutdown().await;
        tracing::info!("Closed store '{}'", self.policy.key);
        flushed
    }
}
