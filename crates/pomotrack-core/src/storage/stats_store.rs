//! JSON-file-backed snapshot persistence.
//!
//! One record at a fixed path, whole-snapshot writes. `get` never fails:
//! a missing or corrupt payload is treated as absent and replaced by the
//! zero-value snapshot, with a warning on stderr. `put` stages the payload
//! in a sibling temp file and renames it into place, so a reader never
//! observes a partial write.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use super::data_dir;
use crate::error::{StorageError, UpdateError};
use crate::stats::{apply, SessionEvent, StatsSnapshot};

/// File name of the persisted snapshot inside the data directory.
pub const STATS_FILE: &str = "stats.json";

/// Persistence contract for the stats snapshot.
///
/// Exactly one `get`/`apply`/`put` cycle is expected in flight at a time;
/// implementations hold no lock and concurrent unsynchronized writers are
/// last-write-wins.
pub trait StatsStore {
    /// The persisted snapshot, or the zero-value default if none exists or
    /// the payload cannot be parsed.
    fn get(&self) -> StatsSnapshot;

    /// Persist the full snapshot. No partial write may be visible to a
    /// subsequent `get`.
    fn put(&self, snapshot: &StatsSnapshot) -> Result<(), StorageError>;
}

/// [`StatsStore`] over a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    /// Open the store at the default location (`data_dir()/stats.json`).
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(STATS_FILE),
        })
    }

    /// Open the store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for FileStatsStore {
    fn get(&self) -> StatsSnapshot {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    eprintln!(
                        "Warning: stats file at {} is unreadable, starting fresh: {e}",
                        self.path.display()
                    );
                    StatsSnapshot::default()
                }
            },
            Err(_) => StatsSnapshot::default(),
        }
    }

    fn put(&self, snapshot: &StatsSnapshot) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(snapshot)?;
        let staged = self.path.with_extension("json.tmp");
        std::fs::write(&staged, content).map_err(|source| StorageError::WriteFailed {
            path: staged.clone(),
            source,
        })?;
        std::fs::rename(&staged, &self.path).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// The result of folding one event: the persisted snapshot and the points
/// earned by that event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsUpdate {
    pub snapshot: StatsSnapshot,
    pub points_earned: u32,
}

/// The current snapshot (zero-valued if nothing is persisted yet).
pub fn load_stats(store: &impl StatsStore) -> StatsSnapshot {
    store.get()
}

/// Fold one completed session into the persisted snapshot: get + apply +
/// put, using the local calendar date as "today".
///
/// # Errors
/// Fails only on the `put`; the computed update rides along in the error
/// so the caller can retry persisting it.
pub fn update_stats(
    store: &impl StatsStore,
    event: SessionEvent,
) -> Result<StatsUpdate, UpdateError> {
    update_stats_at(store, event, Local::now().date_naive())
}

/// [`update_stats`] with an explicit date, for callers that control time.
pub fn update_stats_at(
    store: &impl StatsStore,
    event: SessionEvent,
    today: chrono::NaiveDate,
) -> Result<StatsUpdate, UpdateError> {
    let (snapshot, points_earned) = apply(&store.get(), event, today);
    let update = StatsUpdate {
        snapshot,
        points_earned,
    };
    match store.put(&update.snapshot) {
        Ok(()) => Ok(update),
        Err(source) => Err(UpdateError { update, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStatsStore {
        FileStatsStore::with_path(dir.path().join(STATS_FILE))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn get_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(), StatsSnapshot::default());
    }

    #[test]
    fn get_corrupt_payload_returns_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.get(), StatsSnapshot::default());
    }

    #[test]
    fn put_then_get_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut snapshot = StatsSnapshot::default();
        snapshot.pomodoros = 3;
        snapshot.total_sessions = 3;
        snapshot.last_active_date = Some(date(2026, 4, 2));

        store.put(&snapshot).unwrap();
        assert_eq!(store.get(), snapshot);
    }

    #[test]
    fn put_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.put(&StatsSnapshot::default()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(STATS_FILE)]);
    }

    #[test]
    fn put_overwrites_whole_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut first = StatsSnapshot::default();
        first.daily_counts.insert(date(2026, 4, 1), 9);
        store.put(&first).unwrap();

        let second = StatsSnapshot::default();
        store.put(&second).unwrap();
        assert_eq!(store.get(), second);
    }

    #[test]
    fn update_stats_at_persists_the_fold() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let today = date(2026, 4, 2);

        let update = update_stats_at(&store, SessionEvent::Pomodoro, today).unwrap();
        assert_eq!(update.snapshot.pomodoros, 1);
        assert_eq!(update.points_earned, 50);
        assert_eq!(store.get(), update.snapshot);

        let update = update_stats_at(&store, SessionEvent::Break, today).unwrap();
        assert_eq!(update.snapshot.total_sessions, 2);
        assert_eq!(update.points_earned, 0);
        assert_eq!(store.get(), update.snapshot);
    }

    #[test]
    fn update_error_carries_computed_snapshot() {
        // Point the store at a path whose parent does not exist.
        let dir = TempDir::new().unwrap();
        let store = FileStatsStore::with_path(dir.path().join("missing").join(STATS_FILE));

        let err = update_stats_at(&store, SessionEvent::Pomodoro, date(2026, 4, 2)).unwrap_err();
        assert_eq!(err.update.snapshot.pomodoros, 1);
        assert_eq!(err.update.points_earned, 50);
    }

    #[test]
    fn load_stats_is_just_get() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(load_stats(&store), StatsSnapshot::default());
    }
}
