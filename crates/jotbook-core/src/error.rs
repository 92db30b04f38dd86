//! Error types for jotbook-core

use thiserror::Error;

/// Result type alias using jotbook-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jotbook-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Durable write failed or the persistence worker is gone
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A persisted slice was written by an unknown schema version
    #[error("Unsupported {slice} snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        slice: &'static str,
        found: u32,
        expected: u32,
    },
}
