//! # Pomotrack Core Library
//!
//! This library provides the core business logic for the Pomotrack Pomodoro
//! stats tracker. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary, with any GUI being a thin
//! presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Accounting Engine**: A pure fold over session-completed events; the
//!   caller supplies the current snapshot, the event, and today's date, and
//!   receives the updated snapshot plus any newly earned points
//! - **Achievements**: Static achievement and level definition tables with
//!   read-only progress and level queries
//! - **Storage**: JSON-file-backed snapshot persistence (one record,
//!   read-modify-write, whole-snapshot atomic writes)
//!
//! ## Key Components
//!
//! - [`StatsSnapshot`]: The persisted aggregate (counters, streak, daily
//!   history, achievements, points)
//! - [`apply`]: The accounting engine itself
//! - [`StatsStore`]: Persistence contract, implemented by [`FileStatsStore`]
//! - [`update_stats`]: Convenience get + apply + put for callers

pub mod achievements;
pub mod error;
pub mod stats;
pub mod storage;

pub use achievements::{
    level_for, next_level_for, progress_for, AchievementDef, AchievementId, AchievementProgress,
    LevelDef, Metric, ACHIEVEMENTS, ACHIEVEMENT_POINTS, LEVELS,
};
pub use error::{CoreError, StorageError, UpdateError};
pub use stats::{apply, BestDay, SessionEvent, StatsSnapshot, RETENTION_DAYS};
pub use storage::{load_stats, update_stats, FileStatsStore, StatsStore, StatsUpdate};
