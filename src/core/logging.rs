use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::badges::{self, BadgeUnlocked};
use crate::core::records::{self, RecordUpdate, StrengthEntry};
use crate::db::Database;
use crate::models::activity::{CompletionStatus, MealType};
use crate::models::config::Config;
use crate::models::{ExerciseLog, MealLog, ReminderLog};

/// User-supplied fields for an exercise entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExercise {
    pub exercise: String,
    #[serde(default)]
    pub muscle_group: Option<String>,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub duration_min: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMeal {
    pub food: String,
    pub meal_type: MealType,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

#[derive(Debug, Serialize)]
pub struct LoggedExercise {
    pub log: ExerciseLog,
    pub new_records: Vec<RecordUpdate>,
    pub unlocked_badges: Vec<BadgeUnlocked>,
}

/// Batch entries are tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BatchEntry {
    Exercise(NewExercise),
    Meal(NewMeal),
}

#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    pub exercises: Vec<LoggedExercise>,
    pub meals: Vec<MealLog>,
}

fn validate_exercise(e: &NewExercise) -> Result<()> {
    if e.exercise.trim().is_empty() {
        bail!("exercise name is required");
    }
    if e.sets == 0 || e.reps == 0 {
        bail!("sets and reps must be at least 1");
    }
    if let Some(w) = e.weight
        && (!w.is_finite() || w < 0.0)
    {
        bail!("weight must be a non-negative number: {}", w);
    }
    if let Some(d) = e.duration_min
        && (!d.is_finite() || d < 0.0)
    {
        bail!("duration must be a non-negative number: {}", d);
    }
    Ok(())
}

fn validate_meal(m: &NewMeal) -> Result<()> {
    if m.food.trim().is_empty() {
        bail!("food name is required");
    }
    for (label, v) in [
        ("calories", m.calories),
        ("protein", m.protein),
        ("carbs", m.carbs),
        ("fat", m.fat),
    ] {
        if !v.is_finite() || v < 0.0 {
            bail!("{} must be a non-negative number: {}", label, v);
        }
    }
    Ok(())
}

/// Log an exercise, then update personal records and badge unlocks.
///
/// The entry, its records and its unlocks are written in one transaction, so
/// a failed record or badge write leaves no exercise row behind.
/// `today` anchors the workout streak used by the badge pass.
pub fn log_exercise(
    db: &Database,
    config: &Config,
    input: NewExercise,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<LoggedExercise> {
    validate_exercise(&input)?;
    db.transaction(|db| write_exercise(db, config, input, date, today))
}

/// Expects `input` to be validated and a transaction to be open.
fn write_exercise(
    db: &Database,
    config: &Config,
    input: NewExercise,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<LoggedExercise> {
    let exercise = config.resolve_alias(input.exercise.trim());
    let mut log = ExerciseLog::new(exercise, input.sets, input.reps, input.weight, date);
    log.muscle_group = input.muscle_group.unwrap_or_default().trim().to_string();
    log.duration_min = input.duration_min;
    log.note = input.note;
    db.insert_exercise(&log)?;

    let new_records = records::evaluate(
        db,
        &StrengthEntry {
            exercise: &log.exercise,
            sets: log.sets,
            reps: log.reps,
            weight: log.weight,
            source_id: &log.id,
            date: log.date,
        },
    )?;
    let unlocked_badges = badges::unlock_eligible(db, today)?;

    Ok(LoggedExercise {
        log,
        new_records,
        unlocked_badges,
    })
}

pub fn log_meal(db: &Database, input: NewMeal, date: NaiveDate) -> Result<MealLog> {
    validate_meal(&input)?;
    write_meal(db, input, date)
}

fn write_meal(db: &Database, input: NewMeal, date: NaiveDate) -> Result<MealLog> {
    let mut meal = MealLog::new(input.food.trim().to_string(), input.meal_type, input.calories, date);
    meal.protein = input.protein;
    meal.carbs = input.carbs;
    meal.fat = input.fat;
    db.insert_meal(&meal)?;
    Ok(meal)
}

/// Record a reminder as completed or skipped on `date`.
pub fn complete_reminder(
    db: &Database,
    reminder_id: &str,
    status: CompletionStatus,
    date: NaiveDate,
) -> Result<ReminderLog> {
    if db.get_reminder(reminder_id)?.is_none() {
        bail!("reminder not found: {}", reminder_id);
    }
    let entry = ReminderLog::new(reminder_id.to_string(), status, date);
    db.insert_reminder_log(&entry)?;
    Ok(entry)
}

/// Log a JSON array of `{"kind": "exercise" | "meal", ...}` entries.
///
/// Every entry is validated before anything is written, and the whole batch
/// commits or rolls back as one transaction.
pub fn log_batch(
    db: &Database,
    config: &Config,
    batch_json: &str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<BatchResult> {
    let entries: Vec<BatchEntry> = serde_json::from_str(batch_json)?;
    for entry in &entries {
        match entry {
            BatchEntry::Exercise(e) => validate_exercise(e)?,
            BatchEntry::Meal(m) => validate_meal(m)?,
        }
    }

    db.transaction(|db| {
        let mut result = BatchResult::default();
        for entry in entries {
            match entry {
                BatchEntry::Exercise(e) => {
                    result
                        .exercises
                        .push(write_exercise(db, config, e, date, today)?);
                }
                BatchEntry::Meal(m) => result.meals.push(write_meal(db, m, date)?),
            }
        }
        Ok(result)
    })
}
