#![allow(dead_code)]

use chrono::NaiveDate;
use fitlog::db::Database;
use fitlog::models::activity::MealType;
use fitlog::models::{ExerciseLog, MealLog};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Exercise entry on `date` without going through the logging pipeline.
pub fn make_exercise(
    name: &str,
    sets: u32,
    reps: u32,
    weight: Option<f64>,
    muscle: &str,
    date: NaiveDate,
) -> ExerciseLog {
    let mut e = ExerciseLog::new(name.to_string(), sets, reps, weight, date);
    e.muscle_group = muscle.to_string();
    e
}

pub fn make_meal(calories: f64, protein: f64, date: NaiveDate) -> MealLog {
    let mut m = MealLog::new("test meal".to_string(), MealType::Lunch, calories, date);
    m.protein = protein;
    m
}
