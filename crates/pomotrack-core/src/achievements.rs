//! Achievement and level definitions.
//!
//! Both tables are plain immutable data, loaded once into constants:
//! - [`ACHIEVEMENTS`]: five milestones, each tied to one snapshot metric and
//!   a threshold. Table order is evaluation order, which fixes the tie-break
//!   when several unlock on the same event.
//! - [`LEVELS`]: four display tiers derived purely from cumulative points,
//!   ordered ascending by `min_points`. Levels are never persisted; they are
//!   recomputed on read.

use serde::{Deserialize, Serialize};

use crate::stats::StatsSnapshot;

/// Points awarded for completing any achievement.
pub const ACHIEVEMENT_POINTS: u32 = 50;

/// Stable achievement identifiers (serialized as SCREAMING_SNAKE_CASE
/// strings, matching the persisted payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementId {
    FirstPomodoro,
    ProductiveDay,
    FocusMaster,
    StreakWarrior,
    BreakBalance,
}

/// Snapshot metric an achievement requirement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Pomodoros,
    PomodorosToday,
    Streak,
    Breaks,
}

/// A single achievement definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: u32,
    pub metric: Metric,
}

/// A display tier derived from cumulative points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelDef {
    pub title: &'static str,
    pub min_points: u32,
    pub icon: &'static str,
}

/// All achievements, in evaluation order.
pub const ACHIEVEMENTS: [AchievementDef; 5] = [
    AchievementDef {
        id: AchievementId::FirstPomodoro,
        title: "First Focus!",
        description: "Complete your first Pomodoro session",
        icon: "\u{1F3AF}",
        requirement: 1,
        metric: Metric::Pomodoros,
    },
    AchievementDef {
        id: AchievementId::ProductiveDay,
        title: "Productive Day",
        description: "Complete 4 Pomodoros in a day",
        icon: "\u{2B50}",
        requirement: 4,
        metric: Metric::PomodorosToday,
    },
    AchievementDef {
        id: AchievementId::FocusMaster,
        title: "Focus Master",
        description: "Complete 25 total Pomodoro sessions",
        icon: "\u{1F3C6}",
        requirement: 25,
        metric: Metric::Pomodoros,
    },
    AchievementDef {
        id: AchievementId::StreakWarrior,
        title: "Streak Warrior",
        description: "Maintain a 3-day streak",
        icon: "\u{1F525}",
        requirement: 3,
        metric: Metric::Streak,
    },
    AchievementDef {
        id: AchievementId::BreakBalance,
        title: "Break Balance",
        description: "Take 10 proper breaks",
        icon: "\u{2696}\u{FE0F}",
        requirement: 10,
        metric: Metric::Breaks,
    },
];

/// All levels, ascending by `min_points`.
pub const LEVELS: [LevelDef; 4] = [
    LevelDef {
        title: "Beginner",
        min_points: 0,
        icon: "\u{1F331}",
    },
    LevelDef {
        title: "Intermediate",
        min_points: 100,
        icon: "\u{1F33F}",
    },
    LevelDef {
        title: "Advanced",
        min_points: 300,
        icon: "\u{1F333}",
    },
    LevelDef {
        title: "Pomodoro Master",
        min_points: 1000,
        icon: "\u{1F393}",
    },
];

/// Progress toward one achievement, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AchievementProgress {
    pub current: u32,
    pub requirement: u32,
    /// `current / requirement`, clamped to 1.0.
    pub ratio: f64,
}

/// The highest tier whose `min_points` is within `total_points`.
///
/// The zero-point tier always matches, so this never falls through.
pub fn level_for(total_points: u32) -> &'static LevelDef {
    LEVELS
        .iter()
        .rev()
        .find(|level| level.min_points <= total_points)
        .unwrap_or(&LEVELS[0])
}

/// The next tier above `total_points` and how many points remain to reach
/// it, or `None` at the top tier.
pub fn next_level_for(total_points: u32) -> Option<(&'static LevelDef, u32)> {
    LEVELS
        .iter()
        .find(|level| level.min_points > total_points)
        .map(|level| (level, level.min_points - total_points))
}

/// Progress toward `def` given the current snapshot. Does not mutate state.
pub fn progress_for(snapshot: &StatsSnapshot, def: &AchievementDef) -> AchievementProgress {
    let current = snapshot.metric_value(def.metric);
    let ratio = (f64::from(current) / f64::from(def.requirement)).min(1.0);
    AchievementProgress {
        current,
        requirement: def.requirement,
        ratio,
    }
}
