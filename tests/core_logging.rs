mod common;

use common::{day, setup_db};
use fitlog::core::logging::{self, NewExercise, NewMeal};
use fitlog::core::records;
use fitlog::core::reminder::{AddReminderParams, add_reminder};
use fitlog::db::StoreError;
use fitlog::models::activity::{CompletionStatus, MealType};
use fitlog::models::config::Config;
use fitlog::models::record::RecordType;

fn config_with_aliases() -> Config {
    Config {
        aliases: Config::default_aliases(),
        ..Config::default()
    }
}

fn bench(weight: f64) -> NewExercise {
    NewExercise {
        exercise: "bench press".into(),
        muscle_group: Some("chest".into()),
        sets: 3,
        reps: 5,
        weight: Some(weight),
        ..Default::default()
    }
}

// ── log_exercise ────────────────────────────────────────────────────────────

#[test]
fn test_first_exercise_sets_records_and_unlocks() {
    let (_dir, db) = setup_db();
    let today = day(2026, 3, 5);

    let out = logging::log_exercise(&db, &Config::default(), bench(100.0), today, today).unwrap();

    assert_eq!(out.log.exercise, "bench press");
    assert_eq!(out.log.muscle_group, "chest");
    assert_eq!(out.new_records.len(), 3);
    assert!(out.new_records.iter().all(|r| r.previous_value.is_none()));

    let chains: Vec<_> = out
        .unlocked_badges
        .iter()
        .map(|b| (b.chain_id, b.milestone))
        .collect();
    assert_eq!(chains, vec![("exercise_count", 1), ("pr_count", 1)]);

    assert_eq!(db.count_exercises().unwrap(), 1);
}

#[test]
fn test_heavier_set_reports_previous_value() {
    let (_dir, db) = setup_db();
    let config = Config::default();
    let today = day(2026, 3, 5);
    logging::log_exercise(&db, &config, bench(100.0), today, today).unwrap();

    let out = logging::log_exercise(&db, &config, bench(105.0), today, today).unwrap();
    let max_weight = out
        .new_records
        .iter()
        .find(|r| r.record_type == RecordType::MaxWeight)
        .unwrap();
    assert_eq!(max_weight.value, 105.0);
    assert_eq!(max_weight.previous_value, Some(100.0));
    assert!(out.unlocked_badges.is_empty());
}

#[test]
fn test_lighter_set_sets_no_record() {
    let (_dir, db) = setup_db();
    let config = Config::default();
    let today = day(2026, 3, 5);
    logging::log_exercise(&db, &config, bench(100.0), today, today).unwrap();

    let out = logging::log_exercise(&db, &config, bench(80.0), today, today).unwrap();
    assert!(out.new_records.is_empty());
    assert_eq!(db.count_exercises().unwrap(), 2);
}

#[test]
fn test_alias_resolves_before_record_lookup() {
    let (_dir, db) = setup_db();
    let config = config_with_aliases();
    let today = day(2026, 3, 5);

    let input = NewExercise {
        exercise: "sq".into(),
        sets: 5,
        reps: 5,
        weight: Some(140.0),
        ..Default::default()
    };
    let out = logging::log_exercise(&db, &config, input, today, today).unwrap();
    assert_eq!(out.log.exercise, "squat");

    let recs = records::list_records(&db, Some("Squat")).unwrap();
    assert_eq!(recs.len(), 3);
}

#[test]
fn test_unweighted_exercise_has_no_records() {
    let (_dir, db) = setup_db();
    let today = day(2026, 3, 5);
    let input = NewExercise {
        exercise: "push up".into(),
        sets: 3,
        reps: 20,
        ..Default::default()
    };
    let out = logging::log_exercise(&db, &Config::default(), input, today, today).unwrap();
    assert!(out.new_records.is_empty());
    assert!(out.log.volume().is_none());
}

#[test]
fn test_log_exercise_validation() {
    let (_dir, db) = setup_db();
    let config = Config::default();
    let today = day(2026, 3, 5);

    let blank = NewExercise {
        exercise: "   ".into(),
        sets: 3,
        reps: 5,
        ..Default::default()
    };
    let err = logging::log_exercise(&db, &config, blank, today, today).unwrap_err();
    assert!(err.to_string().contains("exercise name"));

    let zero_sets = NewExercise {
        exercise: "row".into(),
        sets: 0,
        reps: 5,
        ..Default::default()
    };
    assert!(logging::log_exercise(&db, &config, zero_sets, today, today).is_err());

    let negative = NewExercise {
        weight: Some(-5.0),
        ..bench(0.0)
    };
    let err = logging::log_exercise(&db, &config, negative, today, today).unwrap_err();
    assert!(err.to_string().contains("weight"));

    assert_eq!(db.count_exercises().unwrap(), 0);
}

// ── log_meal ────────────────────────────────────────────────────────────────

#[test]
fn test_log_meal_persists_macros() {
    let (_dir, db) = setup_db();
    let date = day(2026, 3, 5);
    let meal = logging::log_meal(
        &db,
        NewMeal {
            food: " oats ".into(),
            meal_type: MealType::Breakfast,
            calories: 350.0,
            protein: 12.0,
            carbs: 60.0,
            fat: 6.0,
        },
        date,
    )
    .unwrap();
    assert_eq!(meal.food, "oats");

    let stored = db.meals_in_range(date, date).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].meal_type, MealType::Breakfast);
    assert_eq!(stored[0].protein, 12.0);
    assert_eq!(stored[0].carbs, 60.0);
}

#[test]
fn test_log_meal_rejects_negative_calories() {
    let (_dir, db) = setup_db();
    let err = logging::log_meal(
        &db,
        NewMeal {
            food: "soup".into(),
            meal_type: MealType::Dinner,
            calories: -1.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        },
        day(2026, 3, 5),
    )
    .unwrap_err();
    assert!(err.to_string().contains("calories"));
}

// ── complete_reminder ───────────────────────────────────────────────────────

#[test]
fn test_complete_reminder() {
    let (_dir, db) = setup_db();
    let date = day(2026, 3, 5);
    let r = add_reminder(
        &db,
        AddReminderParams {
            title: "stretch",
            category: None,
            frequency: "daily",
            days: None,
            start: date,
            end: None,
        },
    )
    .unwrap();

    logging::complete_reminder(&db, &r.id, CompletionStatus::Completed, date).unwrap();
    logging::complete_reminder(&db, &r.id, CompletionStatus::Skipped, date).unwrap();

    let logs = db.reminder_logs_in_range(date, date).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(
        logs.iter()
            .filter(|l| l.status == CompletionStatus::Completed)
            .count(),
        1
    );
}

#[test]
fn test_complete_unknown_reminder_fails() {
    let (_dir, db) = setup_db();
    let err = logging::complete_reminder(&db, "missing", CompletionStatus::Completed, day(2026, 3, 5))
        .unwrap_err();
    assert!(err.to_string().contains("reminder not found"));
}

// ── log_batch ───────────────────────────────────────────────────────────────

#[test]
fn test_batch_logs_exercises_and_meals() {
    let (_dir, db) = setup_db();
    let date = day(2026, 3, 5);
    let json = r#"[
        {"kind": "exercise", "exercise": "bp", "sets": 3, "reps": 5, "weight": 90},
        {"kind": "meal", "food": "rice", "meal_type": "lunch", "calories": 600, "protein": 30},
        {"kind": "exercise", "exercise": "plank", "sets": 3, "reps": 1, "duration_min": 2}
    ]"#;

    let result = logging::log_batch(&db, &config_with_aliases(), json, date, date).unwrap();
    assert_eq!(result.exercises.len(), 2);
    assert_eq!(result.meals.len(), 1);
    assert_eq!(result.exercises[0].log.exercise, "bench press");
    assert_eq!(result.exercises[1].log.duration_min, Some(2.0));
    assert_eq!(db.count_exercises().unwrap(), 2);
}

#[test]
fn test_batch_is_validated_before_writing() {
    let (_dir, db) = setup_db();
    let date = day(2026, 3, 5);
    let json = r#"[
        {"kind": "exercise", "exercise": "squat", "sets": 5, "reps": 5, "weight": 100},
        {"kind": "exercise", "exercise": "squat", "sets": 0, "reps": 5}
    ]"#;

    assert!(logging::log_batch(&db, &Config::default(), json, date, date).is_err());
    assert_eq!(db.count_exercises().unwrap(), 0);
}

#[test]
fn test_batch_rejects_unknown_kind() {
    let (_dir, db) = setup_db();
    let json = r#"[{"kind": "sleep", "hours": 8}]"#;
    assert!(logging::log_batch(&db, &Config::default(), json, day(2026, 3, 5), day(2026, 3, 5)).is_err());
}

// ── atomicity ───────────────────────────────────────────────────────────────

/// Make every personal-record insert fail, through a second connection.
fn break_record_store(dir: &tempfile::TempDir) {
    let conn = rusqlite::Connection::open(dir.path().join("test.db")).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_records BEFORE INSERT ON personal_records
         BEGIN SELECT RAISE(ABORT, 'record store unavailable'); END;",
    )
    .unwrap();
}

#[test]
fn test_failed_record_write_leaves_no_exercise() {
    let (dir, db) = setup_db();
    break_record_store(&dir);
    let today = day(2026, 3, 5);

    let err = logging::log_exercise(&db, &Config::default(), bench(100.0), today, today).unwrap_err();
    assert!(err.to_string().contains("record store unavailable"));
    assert!(err.downcast_ref::<StoreError>().is_none());

    assert_eq!(db.count_exercises().unwrap(), 0);
    assert!(db.list_unlocks().unwrap().is_empty());

    // the connection is usable again after the rollback
    let input = NewExercise {
        exercise: "plank".into(),
        sets: 1,
        reps: 1,
        ..Default::default()
    };
    logging::log_exercise(&db, &Config::default(), input, today, today).unwrap();
    assert_eq!(db.count_exercises().unwrap(), 1);
}

#[test]
fn test_failed_batch_rolls_back_earlier_entries() {
    let (dir, db) = setup_db();
    break_record_store(&dir);
    let date = day(2026, 3, 5);
    let json = r#"[
        {"kind": "exercise", "exercise": "push up", "sets": 3, "reps": 20},
        {"kind": "meal", "food": "rice", "meal_type": "lunch", "calories": 600},
        {"kind": "exercise", "exercise": "squat", "sets": 5, "reps": 5, "weight": 100}
    ]"#;

    assert!(logging::log_batch(&db, &Config::default(), json, date, date).is_err());
    assert_eq!(db.count_exercises().unwrap(), 0);
    assert!(db.meals_in_range(date, date).unwrap().is_empty());
    assert!(db.list_unlocks().unwrap().is_empty());
}
