use colored::{ColoredString, Colorize};
use comfy_table::{Table, presets};

use crate::core::badges::{BadgeUnlocked, ChainProgress};
use crate::core::grade::Grade;
use crate::core::logging::LoggedExercise;
use crate::core::scorecard::WeeklyScorecard;
use crate::core::status::StatusData;
use crate::models::badge::{BADGE_CHAINS, BadgeUnlock};
use crate::models::record::PersonalRecord;
use crate::models::reminder::Reminder;
use crate::models::{ExerciseLog, MealLog};

fn grade_label(g: Grade) -> ColoredString {
    let s = g.to_string();
    match g {
        Grade::A => s.green().bold(),
        Grade::B => s.green(),
        Grade::C => s.yellow(),
        Grade::D => s.red(),
        Grade::F => s.red().bold(),
    }
}

/// One-line summary of an exercise entry.
pub fn format_exercise(e: &ExerciseLog) -> String {
    let mut line = format!("{} | {} {}x{}", e.date, e.exercise, e.sets, e.reps);
    if let Some(w) = e.weight {
        line.push_str(&format!(" @ {} kg", w));
    }
    if !e.muscle_group.is_empty() {
        line.push_str(&format!(" [{}]", e.muscle_group));
    }
    if let Some(ref note) = e.note {
        line.push_str(&format!("  # {}", note));
    }
    line
}

pub fn format_meal(m: &MealLog) -> String {
    format!(
        "{} | {} ({}) {:.0} kcal, P {:.0} g / C {:.0} g / F {:.0} g",
        m.date, m.food, m.meal_type, m.calories, m.protein, m.carbs, m.fat
    )
}

fn format_unlock(b: &BadgeUnlocked) -> String {
    format!("Badge unlocked: {} {}", b.chain_id, b.milestone)
}

/// Exercise line followed by any new records and badges it produced.
pub fn format_logged_exercise(l: &LoggedExercise) -> String {
    let mut out = format!("Logged: {}", format_exercise(&l.log));
    for r in &l.new_records {
        match r.previous_value {
            Some(prev) => out.push_str(&format!(
                "\n  New PR {}: {} (was {})",
                r.record_type, r.value, prev
            )),
            None => out.push_str(&format!("\n  New PR {}: {}", r.record_type, r.value)),
        }
    }
    for b in &l.unlocked_badges {
        out.push_str(&format!("\n  {}", format_unlock(b)));
    }
    out
}

pub fn format_records(records: &[PersonalRecord]) -> String {
    if records.is_empty() {
        return "No personal records yet.".to_string();
    }
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_header(vec!["Exercise", "Record", "Value", "Reps", "Date", "Previous"]);
    for r in records {
        table.add_row(vec![
            r.exercise.clone(),
            r.record_type.to_string(),
            r.value.to_string(),
            r.reps.map(|n| n.to_string()).unwrap_or_default(),
            r.achieved_on.to_string(),
            r.previous_value.map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
        ]);
    }
    table.to_string()
}

pub fn format_badges(progress: &[ChainProgress], unlocked: &[BadgeUnlocked]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_header(vec!["Badge", "Current", "Earned", "Next", "Progress"]);
    for p in progress {
        let earned: Vec<String> = p.earned.iter().map(|m| m.to_string()).collect();
        table.add_row(vec![
            p.name.to_string(),
            format!("{} {}", p.current, p.unit),
            if earned.is_empty() { "-".into() } else { earned.join(", ") },
            p.next.map(|n| n.to_string()).unwrap_or_else(|| "complete".into()),
            format!("{}%", p.percent_to_next),
        ]);
    }
    let mut out = table.to_string();
    for b in unlocked {
        out.push('\n');
        out.push_str(&format_unlock(b));
    }
    out
}

/// Ledger line, e.g. `2026-03-05 14:02 | exercise_count 10 (value 12 workouts)`.
pub fn format_unlock_entry(u: &BadgeUnlock) -> String {
    let unit = BADGE_CHAINS
        .iter()
        .find(|c| c.id == u.chain_id)
        .map(|c| c.unit)
        .unwrap_or_default();
    let mut line = format!(
        "{} | {} {} (value {}",
        u.unlocked_at.format("%Y-%m-%d %H:%M"),
        u.chain_id,
        u.milestone,
        u.value_snapshot
    );
    if !unit.is_empty() {
        line.push(' ');
        line.push_str(unit);
    }
    line.push(')');
    line
}

pub fn format_scorecard(s: &WeeklyScorecard) -> String {
    let mut out = format!(
        "=== Weekly Scorecard: {} to {} ===\n\n",
        s.window.start, s.window.end
    );
    out.push_str(&format!(
        "  Workouts   [{}]  {}/{} days, {} entries, volume {:.0} kg\n",
        grade_label(s.workout.grade),
        s.workout.active_days,
        s.workout.target_days,
        s.workout.total_exercises,
        s.workout.total_volume
    ));
    out.push_str(&format!(
        "  Nutrition  [{}]  {:.0} kcal avg ({:.0}% of target), protein {:.0}% over {} day(s)\n",
        grade_label(s.nutrition.grade),
        s.nutrition.avg_calories,
        s.nutrition.calorie_adherence,
        s.nutrition.protein_adherence,
        s.nutrition.days_logged
    ));
    out.push_str(&format!(
        "  Reminders  [{}]  {}/{} completed ({:.0}%)\n",
        grade_label(s.reminders.grade),
        s.reminders.completed,
        s.reminders.scheduled,
        s.reminders.adherence
    ));
    if !s.workout.muscle_groups.is_empty() {
        let groups: Vec<String> = s
            .workout
            .muscle_groups
            .iter()
            .map(|(g, n)| format!("{}({})", g, n))
            .collect();
        out.push_str(&format!("  Muscle groups: {}\n", groups.join(", ")));
    }
    out.push_str(&format!(
        "\n  Overall: {} ({})\n",
        grade_label(s.overall_grade),
        s.overall_score
    ));
    for i in &s.insights {
        out.push_str(&format!("  - {}\n", i));
    }
    out
}

pub fn format_status(s: &StatusData) -> String {
    let mut out = format!("=== fitlog status: {} ===\n\n", s.date);
    if s.today.exercises == 0 {
        out.push_str("No exercise logged today.\n");
    } else {
        out.push_str(&format!(
            "Exercise: {} entries, volume {:.0} kg\n",
            s.today.exercises, s.today.volume
        ));
    }
    out.push_str(&format!(
        "Food: {} meal(s), {:.0}/{:.0} kcal, protein {:.0}/{:.0} g\n",
        s.today.meals,
        s.today.calories,
        s.today.calorie_target,
        s.today.protein,
        s.today.protein_target
    ));
    out.push_str(&format!(
        "Workout streak: {} day(s) (best {})\nMeal streak: {} day(s) (best {})",
        s.streaks.exercise.current,
        s.streaks.exercise.longest,
        s.streaks.meals.current,
        s.streaks.meals.longest
    ));
    out
}

pub fn format_reminder(r: &Reminder) -> String {
    let mut line = format!("{} | {} ({}, {})", r.id, r.title, r.category, r.frequency);
    if !r.repeat_days.is_empty() {
        let days: Vec<String> = r.repeat_days.iter().map(|d| d.to_string()).collect();
        line.push_str(&format!(" on {}", days.join(",")));
    }
    line.push_str(&format!(" from {}", r.start_date));
    if let Some(end) = r.end_date {
        line.push_str(&format!(" to {}", end));
    }
    if !r.active {
        line.push_str(" [inactive]");
    }
    line
}
