use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::streak;
use crate::db::Database;
use crate::models::badge::{BADGE_CHAINS, BadgeChain, BadgeUnlock, Statistic};

/// Snapshot of every statistic a badge chain can track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BadgeStats {
    pub workout_streak: u32,
    pub exercise_count: u32,
    pub pr_count: u32,
    pub muscle_groups: u32,
}

impl BadgeStats {
    pub fn value(&self, statistic: Statistic) -> u32 {
        match statistic {
            Statistic::WorkoutStreak => self.workout_streak,
            Statistic::ExerciseCount => self.exercise_count,
            Statistic::PrCount => self.pr_count,
            Statistic::MuscleGroupVariety => self.muscle_groups,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainProgress {
    pub chain_id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub current: u32,
    pub earned: Vec<u32>,
    pub next: Option<u32>,
    pub percent_to_next: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeUnlocked {
    pub chain_id: &'static str,
    pub milestone: u32,
    pub value: u32,
}

pub fn collect_stats(db: &Database, today: NaiveDate) -> Result<BadgeStats> {
    Ok(BadgeStats {
        workout_streak: streak::exercise_streak(db, today)?.current,
        exercise_count: db.count_exercises()?,
        pr_count: db.count_record_exercises()?,
        muscle_groups: db.distinct_muscle_groups()?.len() as u32,
    })
}

/// Progress of one chain for a given statistic value.
pub fn chain_progress(chain: &BadgeChain, current: u32) -> ChainProgress {
    let earned: Vec<u32> = chain
        .milestones
        .iter()
        .copied()
        .filter(|m| *m <= current)
        .collect();
    let next = chain.milestones.iter().copied().find(|m| *m > current);
    let percent_to_next = match next {
        Some(next) => {
            let last = earned.last().copied().unwrap_or(0);
            let pct = f64::from(current - last) / f64::from(next - last) * 100.0;
            pct.round() as u32
        }
        None => 100,
    };
    ChainProgress {
        chain_id: chain.id,
        name: chain.name,
        unit: chain.unit,
        current,
        earned,
        next,
        percent_to_next,
    }
}

pub fn progress(stats: &BadgeStats) -> Vec<ChainProgress> {
    BADGE_CHAINS
        .iter()
        .map(|chain| chain_progress(chain, stats.value(chain.statistic)))
        .collect()
}

pub fn get_progress(db: &Database, today: NaiveDate) -> Result<Vec<ChainProgress>> {
    let stats = collect_stats(db, today)?;
    Ok(progress(&stats))
}

/// Record every milestone the current statistics qualify for and that has not
/// been unlocked yet, in catalog order then ascending milestone.
///
/// A statistic that jumped across several thresholds unlocks all of them here.
/// Existing unlocks are never touched, even if the statistic has since dropped.
pub fn unlock_eligible(db: &Database, today: NaiveDate) -> Result<Vec<BadgeUnlocked>> {
    let stats = collect_stats(db, today)?;
    let mut unlocked = Vec::new();

    for chain in &BADGE_CHAINS {
        let value = stats.value(chain.statistic);
        for &milestone in chain.milestones.iter().take_while(|m| **m <= value) {
            let unlock = BadgeUnlock::new(chain.id, milestone, value);
            if db.insert_unlock_if_absent(&unlock)? {
                tracing::info!(chain = chain.id, milestone, value, "badge unlocked");
                unlocked.push(BadgeUnlocked {
                    chain_id: chain.id,
                    milestone,
                    value,
                });
            }
        }
    }
    Ok(unlocked)
}

pub fn list_unlocks(db: &Database) -> Result<Vec<BadgeUnlock>> {
    db.list_unlocks()
}
