//! In-process key-value store

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::KeyValueStore;
use crate::error::Result;

/// Key-value store held in process memory
///
/// Clones share the same map, so a test can reopen a container on the
/// "same device" by handing it a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one blob
    pub fn with_blob(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let blobs = HashMap::from([(key.into(), value.into())]);
        Self {
            blobs: Arc::new(Mutex::new(blobs)),
        }
    }

    pub async fn len(&self) -> usize {
        self.blobs.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.lock().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.blobs.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.blobs.lock().await.remove(key);
        Ok(())
    }
}
