use anyhow::Result;
use serde_json::json;

use fitlog::models::config::Config;
use fitlog::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        let out = output::success("config", json!({ "config": config }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "name" => config.profile.name = Some(value.to_string()),
        "calorie_target" => config.profile.daily_calorie_target = Some(parse_positive(key, value)?),
        "protein_target" => config.profile.protein_target = Some(parse_positive(key, value)?),
        "workout_days" => {
            let days: u32 = value.parse()?;
            if !(1..=7).contains(&days) {
                anyhow::bail!("workout_days must be between 1 and 7");
            }
            config.targets.workout_days_per_week = days;
        }
        k if k.starts_with("alias.") => {
            let alias = k.trim_start_matches("alias.");
            if alias.is_empty() {
                anyhow::bail!("alias name is empty");
            }
            config.aliases.insert(alias.to_string(), value.to_string());
        }
        _ => anyhow::bail!("unknown config key: {}", key),
    }

    config.save()?;
    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

fn parse_positive(key: &str, value: &str) -> Result<f64> {
    let v: f64 = value.parse()?;
    if !v.is_finite() || v <= 0.0 {
        anyhow::bail!("{} must be a positive number", key);
    }
    Ok(v)
}
