use anyhow::Result;
use std::io::{self, Write};

use fitlog::db::Database;
use fitlog::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if config.aliases.is_empty() {
        config.aliases = Config::default_aliases();
    }

    if !skip {
        println!("fitlog — Initial Setup\n");

        let name = prompt_string("Name (optional)")?;
        if !name.is_empty() {
            config.profile.name = Some(name);
        }
        config.profile.daily_calorie_target = Some(prompt_f64("Daily calorie target (kcal)")?);
        config.profile.protein_target = Some(prompt_f64("Daily protein target (g)")?);
        config.targets.workout_days_per_week = prompt_days("Workout days per week")?;
    }

    config.save()?;
    Database::open(&Config::db_path())?;

    if skip {
        println!("Config initialized with defaults at {:?}", Config::path());
    } else {
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    }
    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_f64(label: &str) -> Result<f64> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<f64>() {
            Ok(v) if v > 0.0 => return Ok(v),
            _ => println!("Please enter a positive number."),
        }
    }
}

fn prompt_days(label: &str) -> Result<u32> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<u32>() {
            Ok(v) if (1..=7).contains(&v) => return Ok(v),
            _ => println!("Please enter a number from 1 to 7."),
        }
    }
}
