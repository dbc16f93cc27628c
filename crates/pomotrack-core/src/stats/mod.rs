//! Stats accounting for completed Pomodoro and break sessions.
//!
//! The snapshot is the single persisted aggregate; the engine folds one
//! session-completed event at a time into it and reports newly earned
//! achievement points.

mod engine;
mod snapshot;

pub use engine::{apply, ParseSessionEventError, SessionEvent, RETENTION_DAYS};
pub use snapshot::{BestDay, StatsSnapshot};
