//! The accounting engine.
//!
//! [`apply`] is a pure function: it never reads the clock or touches
//! storage. The caller injects today's date, which keeps day-boundary
//! behavior (streaks, daily counts, retention) fully testable.

use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::achievements::{ACHIEVEMENTS, ACHIEVEMENT_POINTS};
use crate::stats::{BestDay, StatsSnapshot};

/// Daily counts older than this many days before today are dropped.
pub const RETENTION_DAYS: i64 = 30;

/// A completed session, as reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionEvent {
    Pomodoro,
    Break,
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::Pomodoro => write!(f, "pomodoro"),
            SessionEvent::Break => write!(f, "break"),
        }
    }
}

/// Rejection of an unknown event name at the parse boundary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown session event '{0}', expected 'pomodoro' or 'break'")]
pub struct ParseSessionEventError(String);

impl FromStr for SessionEvent {
    type Err = ParseSessionEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pomodoro" => Ok(SessionEvent::Pomodoro),
            "break" => Ok(SessionEvent::Break),
            other => Err(ParseSessionEventError(other.to_string())),
        }
    }
}

/// Fold one completed session into the snapshot.
///
/// Returns the updated snapshot and the points earned by any achievements
/// newly unlocked on this call (0 if none). The input snapshot is never
/// mutated.
///
/// `pomodoros_today` resets to 1 whenever the previous active day differs
/// from `today`; the comparison uses the last active date as it was
/// *before* this call.
pub fn apply(
    snapshot: &StatsSnapshot,
    event: SessionEvent,
    today: NaiveDate,
) -> (StatsSnapshot, u32) {
    let mut next = snapshot.clone();

    if next.first_active_date.is_none() {
        next.first_active_date = Some(today);
    }

    let previous_active = next.last_active_date;
    next.streak = match previous_active {
        None => 1,
        Some(last) => {
            let days_diff = (today - last).num_days();
            if days_diff == 1 {
                next.streak + 1
            } else if days_diff > 1 {
                1
            } else {
                next.streak
            }
        }
    };
    next.last_active_date = Some(today);

    match event {
        SessionEvent::Pomodoro => {
            next.pomodoros += 1;
            next.total_sessions += 1;
            next.pomodoros_today = if previous_active == Some(today) {
                next.pomodoros_today + 1
            } else {
                1
            };

            let count = next.daily_counts.entry(today).or_insert(0);
            *count += 1;
            if *count > next.best_day.count {
                next.best_day = BestDay {
                    date: Some(today),
                    count: *count,
                };
            }
        }
        SessionEvent::Break => {
            next.breaks += 1;
            next.total_sessions += 1;
        }
    }

    let cutoff = today - Duration::days(RETENTION_DAYS);
    next.daily_counts.retain(|date, _| *date >= cutoff);

    let mut points_earned = 0;
    for def in &ACHIEVEMENTS {
        if next.completed_achievements.contains(&def.id) {
            continue;
        }
        if next.metric_value(def.metric) >= def.requirement {
            next.completed_achievements.insert(def.id);
            points_earned += ACHIEVEMENT_POINTS;
        }
    }
    next.total_points += points_earned;

    (next, points_earned)
}
