use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use fitlog::core::badges;
use fitlog::db::Database;
use fitlog::models::config::Config;
use fitlog::output;
use fitlog::output::human;

pub fn run(unlock: bool, history: bool, today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    if history {
        let unlocks = badges::list_unlocks(&db)?;
        if human_flag {
            if unlocks.is_empty() {
                println!("No badges unlocked yet.");
            }
            for u in &unlocks {
                println!("{}", human::format_unlock_entry(u));
            }
        } else {
            let out = output::success("badges", json!({ "unlocks": unlocks }));
            println!("{}", serde_json::to_string(&out)?);
        }
        return Ok(());
    }

    let unlocked = if unlock {
        badges::unlock_eligible(&db, today)?
    } else {
        Vec::new()
    };
    let progress = badges::get_progress(&db, today)?;

    if human_flag {
        println!("{}", human::format_badges(&progress, &unlocked));
    } else {
        let out = output::success(
            "badges",
            json!({ "progress": progress, "unlocked": unlocked }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
