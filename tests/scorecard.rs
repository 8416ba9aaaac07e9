mod common;

use chrono::{Duration, NaiveDate, Weekday};
use common::{day, make_exercise, make_meal, setup_db};
use fitlog::core::grade::Grade;
use fitlog::core::scorecard::{self, ScorecardInputs, ScorecardTargets, Window};
use fitlog::models::activity::CompletionStatus;
use fitlog::models::config::Config;
use fitlog::models::reminder::{Frequency, Reminder};
use fitlog::models::{ExerciseLog, MealLog, ReminderLog};

const TARGETS: ScorecardTargets = ScorecardTargets {
    workout_days: 4,
    calories: 2000.0,
    protein: 100.0,
};

// Monday 2026-03-02 .. Sunday 2026-03-08
fn week() -> Window {
    Window::starting(day(2026, 3, 2))
}

fn after_week() -> NaiveDate {
    day(2026, 3, 20)
}

fn inputs<'a>(
    exercises: &'a [ExerciseLog],
    meals: &'a [MealLog],
    reminders: &'a [Reminder],
    completions: &'a [ReminderLog],
) -> ScorecardInputs<'a> {
    ScorecardInputs {
        exercises,
        exercise_dates: &[],
        meals,
        reminders,
        completions,
        targets: TARGETS,
    }
}

// ── grading ─────────────────────────────────────────────────────────────────

#[test]
fn test_grade_boundaries() {
    assert_eq!(Grade::from_percent(100.0), Grade::A);
    assert_eq!(Grade::from_percent(90.0), Grade::A);
    assert_eq!(Grade::from_percent(89.0), Grade::B);
    assert_eq!(Grade::from_percent(89.9), Grade::B);
    assert_eq!(Grade::from_percent(75.0), Grade::B);
    assert_eq!(Grade::from_percent(74.9), Grade::C);
    assert_eq!(Grade::from_percent(60.0), Grade::C);
    assert_eq!(Grade::from_percent(40.0), Grade::D);
    assert_eq!(Grade::from_percent(39.9), Grade::F);
    assert_eq!(Grade::from_percent(0.0), Grade::F);
}

#[test]
fn test_grade_anchors() {
    assert_eq!(Grade::A.anchor(), 100.0);
    assert_eq!(Grade::B.anchor(), 80.0);
    assert_eq!(Grade::C.anchor(), 65.0);
    assert_eq!(Grade::D.anchor(), 50.0);
    assert_eq!(Grade::F.anchor(), 30.0);
}

#[test]
fn test_overall_score_weights() {
    // 100*0.4 + 80*0.4 + 65*0.2 = 85
    assert_eq!(scorecard::overall_score(Grade::A, Grade::B, Grade::C), 85);
    // 30*0.4 + 30*0.4 + 100*0.2 = 44
    assert_eq!(scorecard::overall_score(Grade::F, Grade::F, Grade::A), 44);
}

#[test]
fn test_nutrition_score_is_symmetric() {
    assert_eq!(scorecard::nutrition_score(120.0), scorecard::nutrition_score(80.0));
    assert_eq!(scorecard::nutrition_score(80.0), 80.0);
    assert_eq!(scorecard::nutrition_score(100.0), 100.0);
    assert_eq!(scorecard::nutrition_score(250.0), 0.0);
}

// ── window ──────────────────────────────────────────────────────────────────

#[test]
fn test_explicit_start_spans_seven_days() {
    let w = scorecard::resolve_window(Some(day(2026, 3, 4)), day(2026, 5, 1));
    assert_eq!(w.start, day(2026, 3, 4));
    assert_eq!(w.end, day(2026, 3, 10));
}

#[test]
fn test_default_window_is_monday_to_sunday() {
    let thursday = day(2026, 3, 5);
    let w = scorecard::resolve_window(None, thursday);
    assert_eq!(w.start, day(2026, 3, 2));
    assert_eq!(w.end, day(2026, 3, 8));

    let monday = day(2026, 3, 9);
    assert_eq!(scorecard::resolve_window(None, monday).start, monday);
    let sunday = day(2026, 3, 8);
    assert_eq!(scorecard::resolve_window(None, sunday).start, day(2026, 3, 2));
}

// ── domains ─────────────────────────────────────────────────────────────────

#[test]
fn test_empty_week() {
    let card = scorecard::build(week(), &inputs(&[], &[], &[], &[]), after_week());

    assert_eq!(card.workout.active_days, 0);
    assert_eq!(card.workout.grade, Grade::F);
    assert_eq!(card.nutrition.days_logged, 0);
    assert_eq!(card.nutrition.grade, Grade::F);
    assert_eq!(card.reminders.scheduled, 0);
    assert_eq!(card.reminders.adherence, 100.0);
    assert_eq!(card.reminders.grade, Grade::A);
    assert_eq!(card.overall_score, 44);
    assert_eq!(card.overall_grade, Grade::D);
    assert_eq!(
        card.insights,
        vec!["No workouts logged this week.", "No meals logged this week."]
    );
}

#[test]
fn test_workout_summary() {
    let w = week();
    let exercises = vec![
        make_exercise("bench press", 3, 5, Some(100.0), "Chest", w.start),
        make_exercise("push up", 3, 10, None, "chest", w.start),
        make_exercise("squat", 5, 5, Some(120.0), "legs", w.start + Duration::days(2)),
        make_exercise("run", 1, 1, None, "", w.start + Duration::days(4)),
        // outside the window
        make_exercise("squat", 5, 5, Some(200.0), "legs", w.start - Duration::days(1)),
    ];
    let card = scorecard::build(w, &inputs(&exercises, &[], &[], &[]), after_week());

    assert_eq!(card.workout.active_days, 3);
    assert_eq!(card.workout.total_exercises, 4);
    assert_eq!(card.workout.total_volume, 1500.0 + 3000.0);
    assert_eq!(card.workout.target_pct, 75.0);
    assert_eq!(card.workout.grade, Grade::B);
    assert_eq!(card.workout.muscle_groups.get("chest"), Some(&2));
    assert_eq!(card.workout.muscle_groups.get("legs"), Some(&1));
    assert_eq!(card.workout.muscle_groups.len(), 2);
    assert_eq!(card.insights[0], "Worked out 3 of 4 target days, 1 short.");
}

#[test]
fn test_exceeding_workout_target_still_grades_a() {
    let w = week();
    let exercises: Vec<_> = (0..6)
        .map(|i| make_exercise("row", 3, 8, Some(60.0), "back", w.start + Duration::days(i)))
        .collect();
    let card = scorecard::build(w, &inputs(&exercises, &[], &[], &[]), after_week());
    assert_eq!(card.workout.target_pct, 150.0);
    assert_eq!(card.workout.grade, Grade::A);
    assert_eq!(card.insights[0], "Hit your workout target: 6 of 4 days.");
}

#[test]
fn test_nutrition_averages_only_logged_days() {
    let w = week();
    let meals = vec![
        make_meal(1000.0, 40.0, w.start),
        make_meal(800.0, 40.0, w.start),
        make_meal(2200.0, 100.0, w.start + Duration::days(3)),
    ];
    let card = scorecard::build(w, &inputs(&[], &meals, &[], &[]), after_week());

    assert_eq!(card.nutrition.days_logged, 2);
    assert_eq!(card.nutrition.avg_calories, 2000.0);
    assert_eq!(card.nutrition.avg_protein, 90.0);
    assert_eq!(card.nutrition.calorie_adherence, 100.0);
    assert_eq!(card.nutrition.protein_adherence, 90.0);
    assert_eq!(card.nutrition.grade, Grade::A);
    assert!(card.insights.contains(&"Protein on target at 90% of goal.".to_string()));
}

#[test]
fn test_over_and_under_eating_grade_the_same() {
    let w = week();
    let over = vec![make_meal(2400.0, 100.0, w.start)];
    let under = vec![make_meal(1600.0, 100.0, w.start)];
    let a = scorecard::build(w, &inputs(&[], &over, &[], &[]), after_week());
    let b = scorecard::build(w, &inputs(&[], &under, &[], &[]), after_week());

    assert_eq!(a.nutrition.calorie_adherence, 120.0);
    assert_eq!(b.nutrition.calorie_adherence, 80.0);
    assert_eq!(a.nutrition.score, b.nutrition.score);
    assert_eq!(a.nutrition.grade, Grade::B);
    assert_eq!(a.nutrition.grade, b.nutrition.grade);
}

#[test]
fn test_low_protein_insight() {
    let w = week();
    let meals = vec![make_meal(2000.0, 50.0, w.start)];
    let card = scorecard::build(w, &inputs(&[], &meals, &[], &[]), after_week());
    assert!(
        card.insights
            .contains(&"Protein averaged 50% of goal (50 g of 100 g).".to_string())
    );
}

fn reminder(freq: Frequency, start: NaiveDate) -> Reminder {
    Reminder::new("r".into(), "health".into(), freq, start)
}

#[test]
fn test_reminder_scheduled_estimate_and_adherence() {
    let w = week();
    let daily = reminder(Frequency::Daily, w.start + Duration::days(5));
    let mut weekly = reminder(Frequency::Weekly, day(2026, 1, 1));
    weekly.repeat_days = vec![Weekday::Mon, Weekday::Wed, Weekday::Fri];
    let once_in = reminder(Frequency::Once, w.start + Duration::days(2));
    let once_out = reminder(Frequency::Once, w.end + Duration::days(1));
    let mut inactive = reminder(Frequency::Daily, day(2026, 1, 1));
    inactive.active = false;
    let reminders = vec![daily.clone(), weekly, once_in, once_out, inactive];

    let mut completions: Vec<ReminderLog> = (0..5)
        .map(|i| ReminderLog::new(daily.id.clone(), CompletionStatus::Completed, w.start + Duration::days(i)))
        .collect();
    completions.push(ReminderLog::new(daily.id.clone(), CompletionStatus::Skipped, w.end));
    completions.push(ReminderLog::new(
        daily.id.clone(),
        CompletionStatus::Completed,
        w.end + Duration::days(1),
    ));

    let card = scorecard::build(w, &inputs(&[], &[], &reminders, &completions), after_week());
    // daily 7 (even though it starts mid-week) + weekly 3 + once 1
    assert_eq!(card.reminders.scheduled, 11);
    assert_eq!(card.reminders.completed, 5);
    assert_eq!(card.reminders.adherence, 45.5);
    assert_eq!(card.reminders.grade, Grade::D);
}

#[test]
fn test_perfect_week() {
    let w = week();
    let exercises: Vec<_> = (0..4)
        .map(|i| make_exercise("squat", 3, 5, Some(100.0), "legs", w.start + Duration::days(i)))
        .collect();
    let meals: Vec<_> = (0..7)
        .map(|i| make_meal(2000.0, 120.0, w.start + Duration::days(i)))
        .collect();
    let daily = reminder(Frequency::Daily, w.start);
    let completions: Vec<_> = (0..7)
        .map(|i| ReminderLog::new(daily.id.clone(), CompletionStatus::Completed, w.start + Duration::days(i)))
        .collect();
    let reminders = vec![daily];

    let card = scorecard::build(w, &inputs(&exercises, &meals, &reminders, &completions), after_week());
    assert_eq!(card.overall_score, 100);
    assert_eq!(card.overall_grade, Grade::A);
    assert_eq!(
        card.insights,
        vec![
            "Hit your workout target: 4 of 4 days.",
            "Protein on target at 120% of goal.",
            "Reminder adherence at 100%.",
        ]
    );
}

#[test]
fn test_streak_callout_at_seven_days() {
    let w = week();
    let exercises: Vec<_> = (0..7)
        .map(|i| make_exercise("run", 1, 1, None, "", w.start + Duration::days(i)))
        .collect();
    let card = scorecard::build(w, &inputs(&exercises, &[], &[], &[]), after_week());
    assert_eq!(card.current_streak, 7);
    assert!(card.insights.contains(&"7-day workout streak. Keep it going.".to_string()));
}

#[test]
fn test_streak_includes_days_before_window() {
    let w = week();
    let exercises: Vec<_> = (0..3)
        .map(|i| make_exercise("run", 1, 1, None, "", w.start + Duration::days(i)))
        .collect();
    let history: Vec<_> = (1..=5).map(|i| w.start - Duration::days(i)).collect();
    let mut input = inputs(&exercises, &[], &[], &[]);
    input.exercise_dates = &history;

    // As of Wednesday the run is 5 days before the window plus Mon-Wed.
    let card = scorecard::build(w, &input, w.start + Duration::days(2));
    assert_eq!(card.current_streak, 8);
}

// ── end to end ──────────────────────────────────────────────────────────────

#[test]
fn test_build_weekly_is_deterministic() {
    let (_dir, db) = setup_db();
    let start = day(2026, 3, 2);
    for i in 0..3 {
        let d = start + Duration::days(i);
        db.insert_exercise(&make_exercise("squat", 3, 5, Some(100.0), "legs", d)).unwrap();
        db.insert_meal(&make_meal(1900.0, 95.0, d)).unwrap();
    }
    let config = Config::default();
    let today = day(2026, 4, 1);

    let a = scorecard::build_weekly(&db, &config, Some(start), today).unwrap();
    let b = scorecard::build_weekly(&db, &config, Some(start), today).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_eq!(a.workout.active_days, 3);
    assert_eq!(a.nutrition.calorie_target, 2000.0);
    assert_eq!(a.nutrition.calorie_adherence, 95.0);
}

#[test]
fn test_build_weekly_uses_profile_targets() {
    let (_dir, db) = setup_db();
    let start = day(2026, 3, 2);
    db.insert_meal(&make_meal(2500.0, 150.0, start)).unwrap();
    let mut config = Config::default();
    config.profile.daily_calorie_target = Some(2500.0);
    config.profile.protein_target = Some(150.0);
    config.targets.workout_days_per_week = 2;

    let card = scorecard::build_weekly(&db, &config, Some(start), day(2026, 4, 1)).unwrap();
    assert_eq!(card.nutrition.calorie_adherence, 100.0);
    assert_eq!(card.nutrition.protein_adherence, 100.0);
    assert_eq!(card.workout.target_days, 2);
}
