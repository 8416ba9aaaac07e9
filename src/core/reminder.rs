use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::db::Database;
use crate::models::reminder::{Frequency, Reminder, parse_repeat_days};

/// Parameters for adding a new reminder.
pub struct AddReminderParams<'a> {
    pub title: &'a str,
    pub category: Option<&'a str>,
    pub frequency: &'a str,
    pub days: Option<&'a str>,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

pub fn add_reminder(db: &Database, params: AddReminderParams<'_>) -> Result<Reminder> {
    if params.title.trim().is_empty() {
        bail!("reminder title is required");
    }
    let frequency: Frequency = params.frequency.parse()?;
    let repeat_days = match params.days {
        Some(d) => parse_repeat_days(d)?,
        None => Vec::new(),
    };
    if frequency == Frequency::Weekly && repeat_days.is_empty() {
        bail!("weekly reminders need --days (e.g. mon,wed,fri)");
    }
    if let Some(end) = params.end
        && end < params.start
    {
        bail!("end date {} is before start date {}", end, params.start);
    }

    let mut reminder = Reminder::new(
        params.title.trim().to_string(),
        params.category.unwrap_or("general").to_string(),
        frequency,
        params.start,
    );
    reminder.repeat_days = repeat_days;
    reminder.end_date = params.end;
    db.insert_reminder(&reminder)?;
    Ok(reminder)
}

pub fn list_reminders(db: &Database, include_inactive: bool) -> Result<Vec<Reminder>> {
    db.list_reminders(!include_inactive)
}

pub fn deactivate_reminder(db: &Database, id: &str) -> Result<bool> {
    db.deactivate_reminder(id)
}
