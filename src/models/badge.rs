use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived statistic a badge chain tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    /// Current consecutive-day exercise streak.
    WorkoutStreak,
    /// Lifetime exercise-log entries.
    ExerciseCount,
    /// Distinct exercises holding at least one personal record.
    PrCount,
    /// Distinct non-empty muscle groups ever logged.
    MuscleGroupVariety,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BadgeChain {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub statistic: Statistic,
    pub milestones: &'static [u32],
}

/// Fixed badge catalog. Milestones are strictly ascending.
pub const BADGE_CHAINS: [BadgeChain; 4] = [
    BadgeChain {
        id: "workout_streak",
        name: "Streak Keeper",
        unit: "days",
        statistic: Statistic::WorkoutStreak,
        milestones: &[3, 7, 14, 30, 60, 100],
    },
    BadgeChain {
        id: "exercise_count",
        name: "Iron Regular",
        unit: "workouts",
        statistic: Statistic::ExerciseCount,
        milestones: &[1, 10, 50, 100, 250, 500],
    },
    BadgeChain {
        id: "pr_count",
        name: "Record Breaker",
        unit: "exercises",
        statistic: Statistic::PrCount,
        milestones: &[1, 5, 10, 25, 50],
    },
    BadgeChain {
        id: "variety",
        name: "Well Rounded",
        unit: "muscle groups",
        statistic: Statistic::MuscleGroupVariety,
        milestones: &[3, 5, 8, 10],
    },
];

/// Ledger key for a chain milestone, e.g. `exercise_count_50`.
pub fn unlock_key(chain_id: &str, milestone: u32) -> String {
    format!("{}_{}", chain_id, milestone)
}

/// Permanent record that a milestone was reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadgeUnlock {
    pub key: String,
    pub chain_id: String,
    pub milestone: u32,
    pub unlocked_at: DateTime<Utc>,
    pub value_snapshot: u32,
}

impl BadgeUnlock {
    pub fn new(chain_id: &str, milestone: u32, value_snapshot: u32) -> Self {
        Self {
            key: unlock_key(chain_id, milestone),
            chain_id: chain_id.to_string(),
            milestone,
            unlocked_at: Utc::now(),
            value_snapshot,
        }
    }
}
