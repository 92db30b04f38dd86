//! Store configuration.
//!
//! A small JSON file next to the journal database decides where state lives
//! and which slices survive a restart. Missing or malformed files fall back to
//! defaults so a bad edit never blocks startup.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::Slice;
use crate::util::normalize_text_option;

const CONFIG_FILE_NAME: &str = "jotbook-config.json";
const DATABASE_FILE_NAME: &str = "jotbook.db";
const DATA_DIR_ENV: &str = "JOTBOOK_DATA_DIR";

/// Root namespace key the persisted snapshot is stored under
pub const DEFAULT_STORAGE_KEY: &str = "persist:root";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Key of the root snapshot in the durable store
    pub storage_key: String,
    pub persist_entries: bool,
    pub persist_theme: bool,
    pub persist_auth: bool,
    /// libSQL database file; `None` uses the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_entries: true,
            persist_theme: true,
            persist_auth: true,
            database_path: None,
        }
    }
}

impl StoreConfig {
    /// Slices written to and restored from the durable store
    pub fn persisted_slices(&self) -> BTreeSet<Slice> {
        Slice::ALL
            .into_iter()
            .filter(|slice| match slice {
                Slice::Entries => self.persist_entries,
                Slice::Theme => self.persist_theme,
                Slice::Auth => self.persist_auth,
            })
            .collect()
    }

    /// Restrict persistence to exactly `slices`
    #[must_use]
    pub fn with_persisted_slices(mut self, slices: &[Slice]) -> Self {
        self.persist_entries = slices.contains(&Slice::Entries);
        self.persist_theme = slices.contains(&Slice::Theme);
        self.persist_auth = slices.contains(&Slice::Auth);
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self.normalize();
        self
    }

    /// Database path, falling back to the platform data directory
    pub fn resolved_database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| data_dir().join(DATABASE_FILE_NAME))
    }

    pub fn load() -> Self {
        Self::load_from_path(&default_config_path())
    }

    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(config) => config,
                Err(error) => {
                    tracing::warn!(
                        "Failed to parse store config at {}: {}",
                        path.display(),
                        error
                    );
                    Self::default()
                }
            },
            Err(error) => {
                tracing::warn!(
                    "Failed to read store config at {}: {}",
                    path.display(),
                    error
                );
                Self::default()
            }
        };
        config.normalize();
        config
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let content = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.storage_key = normalize_text_option(Some(self.storage_key.clone()))
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
    }
}

/// Writable data directory, honoring `JOTBOOK_DATA_DIR`
pub fn data_dir() -> PathBuf {
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from) {
        return path;
    }
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jotbook")
}

pub fn default_config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}
