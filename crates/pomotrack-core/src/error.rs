//! Core error types for pomotrack-core.
//!
//! Storage reads never produce an error: a missing or unparseable snapshot
//! is replaced by the zero-value default (with a warning on stderr). Only
//! writes can fail, and a failed write surfaces the computed snapshot so
//! the caller can retry the put without redoing the accounting.

use std::path::PathBuf;
use thiserror::Error;

use crate::storage::StatsUpdate;

/// Core error type for pomotrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to resolve or create the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot could not be serialized
    #[error("Failed to serialize stats snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Write to the backing file failed
    #[error("Failed to write stats to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A stats update was computed but could not be persisted.
///
/// The accounting result is carried in [`UpdateError::update`]; callers may
/// retry `put` with `update.snapshot` directly.
#[derive(Error, Debug)]
#[error("stats were computed but could not be persisted: {source}")]
pub struct UpdateError {
    pub update: StatsUpdate,
    #[source]
    pub source: StorageError,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
