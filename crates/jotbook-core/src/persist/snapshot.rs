//! Root snapshot encoding
//!
//! Wire shape (JSON), with only the whitelisted slices present:
//!
//! ```json
//! {
//!   "entries": { "version": 1, "state": [ ... ] },
//!   "theme":   { "version": 1, "state": { "mode": "dark" } },
//!   "auth":    { "version": 1, "state": { "user": { "email": "a@b.com" } } }
//! }
//! ```

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::state::{RootState, Slice};
use crate::util::compact_text;

/// Current schema version of every slice envelope
pub const SNAPSHOT_VERSION: u32 = 1;

/// Where the snapshot lives and which slices it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistPolicy {
    pub key: String,
    pub slices: BTreeSet<Slice>,
}

impl PersistPolicy {
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            key: config.storage_key.clone(),
            slices: config.persisted_slices(),
        }
    }

    pub fn persists(&self, slice: Slice) -> bool {
        self.slices.contains(&slice)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// Slices are kept as raw JSON here and opened one by one, so a malformed
/// envelope only costs its own slice.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedRoot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entries: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth: Option<serde_json::Value>,
}

impl PersistedRoot {
    fn take(&mut self, slice: Slice) -> Option<serde_json::Value> {
        match slice {
            Slice::Entries => self.entries.take(),
            Slice::Theme => self.theme.take(),
            Slice::Auth => self.auth.take(),
        }
    }
}

/// Serialize the whitelisted slices of `state`
pub fn encode(state: &RootState, policy: &PersistPolicy) -> Result<Vec<u8>> {
    let mut root = PersistedRoot::default();
    for slice in &policy.slices {
        let value = match slice {
            Slice::Entries => serde_json::to_value(&state.entries)?,
            Slice::Theme => serde_json::to_value(state.theme)?,
            Slice::Auth => serde_json::to_value(&state.auth)?,
        };
        let envelope = Some(serde_json::to_value(Envelope {
            version: SNAPSHOT_VERSION,
            state: value,
        })?);
        match slice {
            Slice::Entries => root.entries = envelope,
            Slice::Theme => root.theme = envelope,
            Slice::Auth => root.auth = envelope,
        }
    }
    Ok(serde_json::to_vec(&root)?)
}

/// Result of reading a snapshot back
#[derive(Debug, Default)]
pub struct Rehydrated {
    pub state: RootState,
    /// Slices taken from the blob; every other slice is at its default
    pub restored: BTreeSet<Slice>,
}

/// Rebuild state from a stored blob
///
/// Never fails: an unreadable blob yields defaults, and an unreadable or
/// unknown-version slice falls back to its default while the rest restore.
/// Slices outside the policy are ignored even when present.
pub fn decode(bytes: &[u8], policy: &PersistPolicy) -> Rehydrated {
    let mut root = match serde_json::from_slice::<PersistedRoot>(bytes) {
        Ok(root) => root,
        Err(error) => {
            tracing::warn!(
                "Persisted snapshot under '{}' is unreadable, starting fresh: {}",
                policy.key,
                compact_text(&error.to_string())
            );
            return Rehydrated::default();
        }
    };

    let mut rehydrated = Rehydrated::default();
    for slice in &policy.slices {
        let Some(envelope) = root.take(*slice) else {
            continue;
        };
        let restored = match slice {
            Slice::Entries => open_envelope(*slice, envelope).map(|entries| {
                rehydrated.state.entries = entries;
            }),
            Slice::Theme => open_envelope(*slice, envelope).map(|theme| {
                rehydrated.state.theme = theme;
            }),
            Slice::Auth => open_envelope(*slice, envelope).map(|auth| {
                rehydrated.state.auth = auth;
            }),
        };
        match restored {
            Ok(()) => {
                rehydrated.restored.insert(*slice);
            }
            Err(error) => {
                tracing::warn!("Dropping persisted {} slice: {}", slice, error);
            }
        }
    }
    rehydrated
}

fn open_envelope<T: DeserializeOwned>(slice: Slice, raw: serde_json::Value) -> Result<T> {
    let envelope: Envelope<serde_json::Value> = serde_json::from_value(raw)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(Error::UnsupportedVersion {
            slice: slice.as_str(),
            found: envelope.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(serde_json::from_value(envelope.state)?)
}
