use anyhow::Result;
use chrono::NaiveDate;

use fitlog::db::Database;
use fitlog::models::config::Config;
use fitlog::output;
use fitlog::output::human;

pub fn run(today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let status = fitlog::core::status::compute(&db, &config, today)?;

    if human_flag {
        println!("{}", human::format_status(&status));
    } else {
        let out = output::success("status", serde_json::to_value(&status)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
