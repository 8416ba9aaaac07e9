use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::streak::{self, Streak};
use crate::db::Database;
use crate::models::config::Config;

#[derive(Debug, Serialize)]
pub struct StatusData {
    pub date: NaiveDate,
    pub today: TodayStatus,
    pub streaks: Streaks,
}

#[derive(Debug, Serialize)]
pub struct TodayStatus {
    pub exercises: u32,
    pub volume: f64,
    pub meals: u32,
    pub calories: f64,
    pub protein: f64,
    pub calorie_target: f64,
    pub protein_target: f64,
}

#[derive(Debug, Serialize)]
pub struct Streaks {
    pub exercise: Streak,
    pub meals: Streak,
}

/// Compute the daily overview for `today`.
pub fn compute(db: &Database, config: &Config, today: NaiveDate) -> Result<StatusData> {
    let exercises = db.exercises_in_range(today, today)?;
    let meals = db.meals_in_range(today, today)?;

    let volume: f64 = exercises.iter().filter_map(|e| e.volume()).sum();
    let calories: f64 = meals.iter().map(|m| m.calories).sum();
    let protein: f64 = meals.iter().map(|m| m.protein).sum();

    Ok(StatusData {
        date: today,
        today: TodayStatus {
            exercises: exercises.len() as u32,
            volume,
            meals: meals.len() as u32,
            calories,
            protein,
            calorie_target: config.profile.calorie_target(),
            protein_target: config.profile.protein_target(),
        },
        streaks: Streaks {
            exercise: streak::exercise_streak(db, today)?,
            meals: streak::meal_streak(db, today)?,
        },
    })
}
