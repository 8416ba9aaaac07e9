use anyhow::Result;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::db::Database;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

/// Compute current and longest consecutive-day runs over `dates`.
///
/// The current streak gets one day of grace: it is still alive if the most
/// recent date is yesterday. Dates after `today` are ignored for it.
pub fn compute(dates: &[NaiveDate], today: NaiveDate) -> Streak {
    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    Streak {
        current: current_streak(&sorted, today),
        longest: longest_streak(&sorted),
    }
}

/// `desc` must be sorted descending and deduplicated.
fn current_streak(desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut days = desc.iter().copied().skip_while(|d| *d > today).peekable();
    let Some(&latest) = days.peek() else {
        return 0;
    };
    if latest < today - Duration::days(1) {
        return 0;
    }

    let mut streak = 0u32;
    let mut expected = latest;
    for d in days {
        if d != expected {
            break;
        }
        streak += 1;
        expected -= Duration::days(1);
    }
    streak
}

fn longest_streak(desc: &[NaiveDate]) -> u32 {
    if desc.is_empty() {
        return 0;
    }
    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in desc.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest.max(run)
}

/// Streak over days with at least one exercise entry.
pub fn exercise_streak(db: &Database, today: NaiveDate) -> Result<Streak> {
    let dates = db.distinct_exercise_dates()?;
    Ok(compute(&dates, today))
}

/// Streak over days with at least one meal logged.
pub fn meal_streak(db: &Database, today: NaiveDate) -> Result<Streak> {
    let dates = db.distinct_meal_dates()?;
    Ok(compute(&dates, today))
}
