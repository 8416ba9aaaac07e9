use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use fitlog::core::logging::{self, NewExercise, NewMeal};
use fitlog::db::Database;
use fitlog::models::config::Config;
use fitlog::output;
use fitlog::output::human;

pub struct ExerciseArgs {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f64>,
    pub muscle: Option<String>,
    pub duration: Option<f64>,
    pub note: Option<String>,
}

pub struct MealArgs {
    pub food: String,
    pub meal_type: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub fn run_exercise(args: ExerciseArgs, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let input = NewExercise {
        exercise: args.name,
        muscle_group: args.muscle,
        sets: args.sets,
        reps: args.reps,
        weight: args.weight,
        duration_min: args.duration,
        note: args.note,
    };
    let logged = logging::log_exercise(&db, &config, input, today, today)?;

    if human_flag {
        println!("{}", human::format_logged_exercise(&logged));
    } else {
        let out = output::success("log", serde_json::to_value(&logged)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_meal(args: MealArgs, today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    let input = NewMeal {
        food: args.food,
        meal_type: args.meal_type.parse()?,
        calories: args.calories,
        protein: args.protein,
        carbs: args.carbs,
        fat: args.fat,
    };
    let meal = logging::log_meal(&db, input, today)?;

    if human_flag {
        println!("Logged: {}", human::format_meal(&meal));
    } else {
        let out = output::success("log", json!({ "meal": meal }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_batch(batch_json: &str, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let result = logging::log_batch(&db, &config, batch_json, today, today)?;

    if human_flag {
        for e in &result.exercises {
            println!("{}", human::format_logged_exercise(e));
        }
        for m in &result.meals {
            println!("Logged: {}", human::format_meal(m));
        }
    } else {
        let out = output::success("log", serde_json::to_value(&result)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(limit: u32, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let entries = db.list_exercises(Some(limit))?;

    if human_flag {
        if entries.is_empty() {
            println!("No exercise entries.");
        }
        for e in &entries {
            println!("{}  {}", e.id, human::format_exercise(e));
        }
    } else {
        let out = output::success("log", json!({ "exercises": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_remove(id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    if !db.delete_exercise(id)? {
        anyhow::bail!("exercise entry not found: {}", id);
    }

    if human_flag {
        println!("Removed exercise entry {}", id);
    } else {
        let out = output::success("log", json!({ "removed": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
