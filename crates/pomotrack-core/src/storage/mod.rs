mod stats_store;

pub use stats_store::{load_stats, update_stats, update_stats_at, FileStatsStore, StatsStore, StatsUpdate, STATS_FILE};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/pomotrack[-dev]/` based on POMOTRACK_ENV.
///
/// Set POMOTRACK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("POMOTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pomotrack-dev")
    } else {
        base_dir.join("pomotrack")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
