use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// One logged strength or cardio entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: String,
    pub date: NaiveDate,
    pub exercise: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ExerciseLog {
    pub fn new(exercise: String, sets: u32, reps: u32, weight: Option<f64>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            exercise,
            muscle_group: String::new(),
            sets,
            reps,
            weight,
            duration_min: None,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// `sets × reps × weight`, or `None` when no weight was logged.
    pub fn volume(&self) -> Option<f64> {
        self.weight
            .map(|w| f64::from(self.sets) * f64::from(self.reps) * w)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

impl FromStr for MealType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => anyhow::bail!(
                "invalid meal type: {} (expected breakfast/lunch/dinner/snack)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLog {
    pub id: String,
    pub date: NaiveDate,
    pub food: String,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub created_at: DateTime<Utc>,
}

impl MealLog {
    pub fn new(food: String, meal_type: MealType, calories: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            food,
            meal_type,
            calories,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Completed,
    Skipped,
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

impl FromStr for CompletionStatus {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "completed" => Ok(Self::Completed),
            "skipped" => Ok(Self::Skipped),
            _ => anyhow::bail!("invalid status: {} (expected completed/skipped)", s),
        }
    }
}

/// A reminder marked done (or skipped) on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderLog {
    pub id: String,
    pub reminder_id: String,
    pub date: NaiveDate,
    pub status: CompletionStatus,
    pub created_at: DateTime<Utc>,
}

impl ReminderLog {
    pub fn new(reminder_id: String, status: CompletionStatus, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            reminder_id,
            date,
            status,
            created_at: Utc::now(),
        }
    }
}
