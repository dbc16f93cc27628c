//! The persisted stats aggregate.
//!
//! Serialized as a single JSON record with camelCase field names and
//! ISO-8601 dates. Every field defaults, so a payload written by an older
//! build (or a partially missing one) still deserializes into a usable
//! snapshot.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::achievements::{AchievementId, Metric};

/// The day with the highest single-day pomodoro count seen so far.
///
/// A high-water mark: it is only replaced when exceeded, and survives its
/// backing `daily_counts` entry falling out of the retention window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestDay {
    pub date: Option<NaiveDate>,
    pub count: u32,
}

/// The persisted stats aggregate. One instance, read-modify-write.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    /// Lifetime completed focus sessions.
    pub pomodoros: u32,
    /// Sessions completed on the current active day.
    pub pomodoros_today: u32,
    /// Lifetime completed break sessions.
    pub breaks: u32,
    /// Consecutive active days.
    pub streak: u32,
    /// Date of the most recent counted event.
    pub last_active_date: Option<NaiveDate>,
    /// Date of the very first counted event; set once.
    pub first_active_date: Option<NaiveDate>,
    /// Cumulative achievement points.
    pub total_points: u32,
    /// Achievements already awarded; never shrinks.
    pub completed_achievements: BTreeSet<AchievementId>,
    /// Lifetime sessions; always equals pomodoros + breaks.
    pub total_sessions: u32,
    /// Pomodoros completed per day, trailing 30 days only.
    pub daily_counts: BTreeMap<NaiveDate, u32>,
    pub best_day: BestDay,
}

impl StatsSnapshot {
    /// The snapshot field an achievement metric reads.
    pub fn metric_value(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Pomodoros => self.pomodoros,
            Metric::PomodorosToday => self.pomodoros_today,
            Metric::Streak => self.streak,
            Metric::Breaks => self.breaks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_snapshot_is_zero_valued() {
        let snapshot = StatsSnapshot::default();
        assert_eq!(snapshot.pomodoros, 0);
        assert_eq!(snapshot.streak, 0);
        assert_eq!(snapshot.total_points, 0);
        assert!(snapshot.last_active_date.is_none());
        assert!(snapshot.first_active_date.is_none());
        assert!(snapshot.completed_achievements.is_empty());
        assert!(snapshot.daily_counts.is_empty());
        assert_eq!(snapshot.best_day, BestDay::default());
    }

    #[test]
    fn wire_format_uses_camel_case_and_iso_dates() {
        let mut snapshot = StatsSnapshot::default();
        snapshot.pomodoros_today = 2;
        snapshot.last_active_date = Some(date(2026, 3, 14));
        snapshot.daily_counts.insert(date(2026, 3, 14), 2);
        snapshot.completed_achievements.insert(AchievementId::FirstPomodoro);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["pomodorosToday"], 2);
        assert_eq!(json["lastActiveDate"], "2026-03-14");
        assert_eq!(json["dailyCounts"]["2026-03-14"], 2);
        assert_eq!(json["completedAchievements"][0], "FIRST_POMODORO");
        assert_eq!(json["bestDay"]["count"], 0);
    }

    #[test]
    fn missing_fields_default() {
        // A minimal legacy payload still parses.
        let snapshot: StatsSnapshot = serde_json::from_str(r#"{"pomodoros": 7}"#).unwrap();
        assert_eq!(snapshot.pomodoros, 7);
        assert_eq!(snapshot.breaks, 0);
        assert!(snapshot.daily_counts.is_empty());
        assert!(snapshot.best_day.date.is_none());
    }

    #[test]
    fn roundtrips_through_json() {
        let mut snapshot = StatsSnapshot::default();
        snapshot.pomodoros = 25;
        snapshot.breaks = 10;
        snapshot.total_sessions = 35;
        snapshot.streak = 3;
        snapshot.first_active_date = Some(date(2026, 1, 1));
        snapshot.last_active_date = Some(date(2026, 1, 3));
        snapshot.best_day = BestDay {
            date: Some(date(2026, 1, 2)),
            count: 9,
        };
        snapshot.completed_achievements.insert(AchievementId::FocusMaster);

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: StatsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
