use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use fitlog::core::logging;
use fitlog::core::reminder::{self, AddReminderParams};
use fitlog::db::Database;
use fitlog::models::activity::CompletionStatus;
use fitlog::models::config::Config;
use fitlog::output;
use fitlog::output::human;

pub fn run_add(params: AddReminderParams<'_>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let r = reminder::add_reminder(&db, params)?;

    if human_flag {
        println!("Reminder added: {}", human::format_reminder(&r));
    } else {
        let out = output::success("reminder", json!({ "reminder": r }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(all: bool, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let reminders = reminder::list_reminders(&db, all)?;

    if human_flag {
        if reminders.is_empty() {
            println!("No reminders.");
        }
        for r in &reminders {
            println!("{}", human::format_reminder(r));
        }
    } else {
        let out = output::success("reminder", json!({ "reminders": reminders }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_done(id: &str, skipped: bool, today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let status = if skipped {
        CompletionStatus::Skipped
    } else {
        CompletionStatus::Completed
    };
    let entry = logging::complete_reminder(&db, id, status, today)?;

    if human_flag {
        println!("Reminder {} marked {} for {}", id, entry.status, entry.date);
    } else {
        let out = output::success("reminder", json!({ "completion": entry }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_remove(id: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    if !reminder::deactivate_reminder(&db, id)? {
        anyhow::bail!("reminder not found or already inactive: {}", id);
    }

    if human_flag {
        println!("Reminder removed: {}", id);
    } else {
        let out = output::success("reminder", json!({ "removed": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
