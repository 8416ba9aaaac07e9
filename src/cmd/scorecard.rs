use anyhow::Result;
use chrono::NaiveDate;

use fitlog::core::scorecard;
use fitlog::db::Database;
use fitlog::models::config::Config;
use fitlog::output;
use fitlog::output::human;

pub fn run(start: Option<NaiveDate>, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let card = scorecard::build_weekly(&db, &config, start, today)?;

    if human_flag {
        print!("{}", human::format_scorecard(&card));
    } else {
        let out = output::success("scorecard", serde_json::to_value(&card)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
