use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use fitlog::core::streak;
use fitlog::db::Database;
use fitlog::models::config::Config;
use fitlog::output;

pub fn run(today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let exercise = streak::exercise_streak(&db, today)?;
    let meals = streak::meal_streak(&db, today)?;

    if human_flag {
        println!(
            "Workout streak: {} day(s), longest {}",
            exercise.current, exercise.longest
        );
        println!(
            "Meal streak:    {} day(s), longest {}",
            meals.current, meals.longest
        );
    } else {
        let out = output::success(
            "streak",
            json!({ "date": today, "exercise": exercise, "meals": meals }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
