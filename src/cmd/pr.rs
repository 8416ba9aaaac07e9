use anyhow::Result;
use serde_json::json;

use fitlog::core::records;
use fitlog::db::Database;
use fitlog::models::config::Config;
use fitlog::output;
use fitlog::output::human;

pub fn run(exercise: Option<&str>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let resolved = exercise.map(|e| config.resolve_alias(e));
    let list = records::list_records(&db, resolved.as_deref())?;

    if human_flag {
        println!("{}", human::format_records(&list));
    } else {
        let out = output::success("pr", json!({ "records": list }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
