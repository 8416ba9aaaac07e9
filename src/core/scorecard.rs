use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::grade::Grade;
use crate::core::streak;
use crate::db::Database;
use crate::models::activity::CompletionStatus;
use crate::models::config::Config;
use crate::models::reminder::Reminder;
use crate::models::{ExerciseLog, MealLog, ReminderLog};

const WORKOUT_WEIGHT: f64 = 0.4;
const NUTRITION_WEIGHT: f64 = 0.4;
const REMINDER_WEIGHT: f64 = 0.2;
const STREAK_CALLOUT_DAYS: u32 = 7;
const REMINDER_CALLOUT_PCT: f64 = 90.0;

/// Inclusive 7-day interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Explicit start gives `[start, start+6]`; otherwise the Monday–Sunday week holding `today`.
pub fn resolve_window(start: Option<NaiveDate>, today: NaiveDate) -> Window {
    match start {
        Some(s) => Window::starting(s),
        None => {
            let offset = today.weekday().num_days_from_monday();
            Window::starting(today - Duration::days(i64::from(offset)))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScorecardTargets {
    pub workout_days: u32,
    pub calories: f64,
    pub protein: f64,
}

impl ScorecardTargets {
    pub fn from_config(config: &Config) -> Self {
        Self {
            workout_days: config.targets.workout_days_per_week,
            calories: config.profile.calorie_target(),
            protein: config.profile.protein_target(),
        }
    }
}

/// Everything the builder reads. Logs outside the window are ignored.
pub struct ScorecardInputs<'a> {
    pub exercises: &'a [ExerciseLog],
    /// Exercise days before the window, for the streak.
    pub exercise_dates: &'a [NaiveDate],
    pub meals: &'a [MealLog],
    pub reminders: &'a [Reminder],
    pub completions: &'a [ReminderLog],
    pub targets: ScorecardTargets,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub active_days: u32,
    pub target_days: u32,
    pub target_pct: f64,
    pub total_exercises: u32,
    pub total_volume: f64,
    pub muscle_groups: BTreeMap<String, u32>,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub days_logged: u32,
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    pub calorie_target: f64,
    pub protein_target: f64,
    pub calorie_adherence: f64,
    pub protein_adherence: f64,
    pub score: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderSummary {
    pub scheduled: u32,
    pub completed: u32,
    pub adherence: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyScorecard {
    pub window: Window,
    pub workout: WorkoutSummary,
    pub nutrition: NutritionSummary,
    pub reminders: ReminderSummary,
    pub current_streak: u32,
    pub overall_score: u32,
    pub overall_grade: Grade,
    pub insights: Vec<String>,
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 { 0.0 } else { part / whole * 100.0 }
}

/// Nutrition score: 100 minus the distance of calorie adherence from 100%,
/// so eating 20% over or 20% under scores the same.
pub fn nutrition_score(calorie_adherence: f64) -> f64 {
    (100.0 - (100.0 - calorie_adherence).abs()).max(0.0)
}

/// Weighted combination of the three domain grades, rounded.
pub fn overall_score(workout: Grade, nutrition: Grade, reminders: Grade) -> u32 {
    let score = workout.anchor() * WORKOUT_WEIGHT
        + nutrition.anchor() * NUTRITION_WEIGHT
        + reminders.anchor() * REMINDER_WEIGHT;
    score.round() as u32
}

fn summarize_workouts(window: &Window, exercises: &[ExerciseLog], target_days: u32) -> WorkoutSummary {
    let in_window: Vec<&ExerciseLog> = exercises.iter().filter(|e| window.contains(e.date)).collect();

    let active_days: BTreeSet<NaiveDate> = in_window.iter().map(|e| e.date).collect();
    let total_volume: f64 = in_window.iter().filter_map(|e| e.volume()).sum();

    let mut muscle_groups: BTreeMap<String, u32> = BTreeMap::new();
    for e in &in_window {
        let group = e.muscle_group.trim().to_lowercase();
        if !group.is_empty() {
            *muscle_groups.entry(group).or_default() += 1;
        }
    }

    let active = active_days.len() as u32;
    let target_pct = percent(f64::from(active), f64::from(target_days));
    WorkoutSummary {
        active_days: active,
        target_days,
        target_pct: round1(target_pct),
        total_exercises: in_window.len() as u32,
        total_volume: round1(total_volume),
        muscle_groups,
        grade: Grade::from_percent(target_pct),
    }
}

#[derive(Default)]
struct DayTotals {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

fn summarize_nutrition(
    window: &Window,
    meals: &[MealLog],
    targets: &ScorecardTargets,
) -> NutritionSummary {
    // Days without meals are left out of the averages rather than counted as zero.
    let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();
    for m in meals.iter().filter(|m| window.contains(m.date)) {
        let day = days.entry(m.date).or_default();
        day.calories += m.calories;
        day.protein += m.protein;
        day.carbs += m.carbs;
        day.fat += m.fat;
    }

    let n = days.len() as f64;
    let avg = |f: fn(&DayTotals) -> f64| -> f64 {
        if days.is_empty() {
            0.0
        } else {
            days.values().map(f).sum::<f64>() / n
        }
    };
    let avg_calories = avg(|d| d.calories);
    let avg_protein = avg(|d| d.protein);
    let avg_carbs = avg(|d| d.carbs);
    let avg_fat = avg(|d| d.fat);

    let calorie_adherence = percent(avg_calories, targets.calories);
    let protein_adherence = percent(avg_protein, targets.protein);
    let score = nutrition_score(calorie_adherence);

    NutritionSummary {
        days_logged: days.len() as u32,
        avg_calories: round1(avg_calories),
        avg_protein: round1(avg_protein),
        avg_carbs: round1(avg_carbs),
        avg_fat: round1(avg_fat),
        calorie_target: targets.calories,
        protein_target: targets.protein,
        calorie_adherence: round1(calorie_adherence),
        protein_adherence: round1(protein_adherence),
        score: round1(score),
        grade: Grade::from_percent(score),
    }
}

fn summarize_reminders(
    window: &Window,
    reminders: &[Reminder],
    completions: &[ReminderLog],
) -> ReminderSummary {
    let scheduled: u32 = reminders
        .iter()
        .filter(|r| r.active)
        .map(|r| r.scheduled_in_week(window.start, window.end))
        .sum();
    let completed = completions
        .iter()
        .filter(|l| l.status == CompletionStatus::Completed && window.contains(l.date))
        .count() as u32;
    let adherence = if scheduled == 0 {
        100.0
    } else {
        percent(f64::from(completed), f64::from(scheduled))
    };
    ReminderSummary {
        scheduled,
        completed,
        adherence: round1(adherence),
        grade: Grade::from_percent(adherence),
    }
}

fn insights(
    workout: &WorkoutSummary,
    nutrition: &NutritionSummary,
    reminders: &ReminderSummary,
    current_streak: u32,
) -> Vec<String> {
    let mut out = Vec::new();

    if workout.active_days == 0 {
        out.push("No workouts logged this week.".to_string());
    } else if workout.active_days >= workout.target_days {
        out.push(format!(
            "Hit your workout target: {} of {} days.",
            workout.active_days, workout.target_days
        ));
    } else {
        out.push(format!(
            "Worked out {} of {} target days, {} short.",
            workout.active_days,
            workout.target_days,
            workout.target_days - workout.active_days
        ));
    }

    if nutrition.days_logged == 0 {
        out.push("No meals logged this week.".to_string());
    } else if nutrition.protein_adherence >= 90.0 {
        out.push(format!(
            "Protein on target at {:.0}% of goal.",
            nutrition.protein_adherence
        ));
    } else {
        out.push(format!(
            "Protein averaged {:.0}% of goal ({:.0} g of {:.0} g).",
            nutrition.protein_adherence, nutrition.avg_protein, nutrition.protein_target
        ));
    }

    if current_streak >= STREAK_CALLOUT_DAYS {
        out.push(format!("{}-day workout streak. Keep it going.", current_streak));
    }

    if reminders.scheduled > 0 && reminders.adherence >= REMINDER_CALLOUT_PCT {
        out.push(format!(
            "Reminder adherence at {:.0}%.",
            reminders.adherence
        ));
    }

    out
}

/// Build a scorecard from already-fetched logs. Deterministic in its inputs.
pub fn build(window: Window, inputs: &ScorecardInputs<'_>, today: NaiveDate) -> WeeklyScorecard {
    let workout = summarize_workouts(&window, inputs.exercises, inputs.targets.workout_days);
    let nutrition = summarize_nutrition(&window, inputs.meals, &inputs.targets);
    let reminders = summarize_reminders(&window, inputs.reminders, inputs.completions);

    let as_of = window.end.min(today);
    let dates: Vec<NaiveDate> = inputs
        .exercise_dates
        .iter()
        .copied()
        .chain(inputs.exercises.iter().map(|e| e.date))
        .collect();
    let current_streak = streak::compute(&dates, as_of).current;

    let overall = overall_score(workout.grade, nutrition.grade, reminders.grade);
    let insights = insights(&workout, &nutrition, &reminders, current_streak);

    WeeklyScorecard {
        window,
        workout,
        nutrition,
        reminders,
        current_streak,
        overall_score: overall,
        overall_grade: Grade::from_percent(f64::from(overall)),
        insights,
    }
}

/// Fetch everything for the window and build the scorecard.
pub fn build_weekly(
    db: &Database,
    config: &Config,
    start: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<WeeklyScorecard> {
    let window = resolve_window(start, today);
    let exercises = db.exercises_in_range(window.start, window.end)?;
    let exercise_dates = db.distinct_exercise_dates()?;
    let meals = db.meals_in_range(window.start, window.end)?;
    let reminders = db.list_reminders(true)?;
    let completions = db.reminder_logs_in_range(window.start, window.end)?;

    let inputs = ScorecardInputs {
        exercises: &exercises,
        exercise_dates: &exercise_dates,
        meals: &meals,
        reminders: &reminders,
        completions: &completions,
        targets: ScorecardTargets::from_config(config),
    };
    let card = build(window, &inputs, today);
    tracing::debug!(
        start = %window.start,
        end = %window.end,
        overall = card.overall_score,
        grade = %card.overall_grade,
        "weekly scorecard built"
    );
    Ok(card)
}
