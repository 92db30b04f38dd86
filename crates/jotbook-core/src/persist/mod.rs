//! Durable persistence of the state tree
//!
//! The durable store is an opaque async key-value map. The root snapshot is
//! written under one configured key; each slice inside it carries its own
//! schema version so one unreadable slice never costs the others.

mod memory;
pub mod snapshot;
mod worker;

use std::future::Future;

pub use memory::MemoryStore;
pub use snapshot::{PersistPolicy, SNAPSHOT_VERSION};
pub(crate) use worker::{spawn, PersistHandle};

use crate::error::Result;

/// Async key-value storage for serialized blobs
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Delete the blob under `key`; absent keys are not an error
    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Health of the background writer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersistStatus {
    /// Nothing has been written since open
    #[default]
    Idle,
    /// The newest queued snapshot is durable
    Saved { writes: u64 },
    /// The last write failed; `attempts` counts consecutive failures
    Failed { error: String, attempts: u32 },
    /// The startup read failed, so nothing is written until a retry
    Held { error: String },
}

impl PersistStatus {
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub const fn is_held(&self) -> bool {
        matches!(self, Self::Held { .. })
    }
}
