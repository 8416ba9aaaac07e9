use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rusqlite::params;

use crate::models::ReminderLog;
use crate::models::reminder::Reminder;

use super::Database;

struct ReminderRow {
    id: String,
    title: String,
    category: String,
    frequency: String,
    repeat_days: Option<String>,
    start_date: String,
    end_date: Option<String>,
    active: bool,
    created_at: String,
}

fn row_to_reminder(r: ReminderRow) -> Result<Reminder> {
    let repeat_days: Vec<Weekday> = match r.repeat_days {
        Some(ref d) => serde_json::from_str(d)?,
        None => Vec::new(),
    };
    let end_date: Option<NaiveDate> = match r.end_date {
        Some(ref d) => Some(d.parse()?),
        None => None,
    };
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    Ok(Reminder {
        id: r.id,
        title: r.title,
        category: r.category,
        frequency: r.frequency.parse()?,
        repeat_days,
        start_date: r.start_date.parse()?,
        end_date,
        active: r.active,
        created_at,
    })
}

const SELECT_COLS: &str =
    "id, title, category, frequency, repeat_days, start_date, end_date, active, created_at";

macro_rules! map_row {
    ($row:expr) => {
        Ok(ReminderRow {
            id: $row.get(0)?,
            title: $row.get(1)?,
            category: $row.get(2)?,
            frequency: $row.get(3)?,
            repeat_days: $row.get(4)?,
            start_date: $row.get(5)?,
            end_date: $row.get(6)?,
            active: $row.get(7)?,
            created_at: $row.get(8)?,
        })
    };
}

impl Database {
    pub fn insert_reminder(&self, r: &Reminder) -> Result<()> {
        let days_json = if r.repeat_days.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&r.repeat_days)?)
        };
        self.conn.execute(
            "INSERT INTO reminders (id, title, category, frequency, repeat_days, start_date, end_date, active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                r.id,
                r.title,
                r.category,
                r.frequency.to_string(),
                days_json,
                r.start_date.to_string(),
                r.end_date.map(|d| d.to_string()),
                r.active,
                r.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn list_reminders(&self, active_only: bool) -> Result<Vec<Reminder>> {
        let sql = if active_only {
            format!("SELECT {SELECT_COLS} FROM reminders WHERE active = 1 ORDER BY created_at")
        } else {
            format!("SELECT {SELECT_COLS} FROM reminders ORDER BY created_at")
        };
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| map_row!(row))?;

        let mut reminders = Vec::new();
        for row in rows {
            reminders.push(row_to_reminder(row?)?);
        }
        Ok(reminders)
    }

    pub fn get_reminder(&self, id: &str) -> Result<Option<Reminder>> {
        let sql = format!("SELECT {SELECT_COLS} FROM reminders WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query_map(params![id], |row| map_row!(row))?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_reminder(row?)?)),
            None => Ok(None),
        }
    }

    pub fn deactivate_reminder(&self, id: &str) -> Result<bool> {
        let count = self.conn.execute(
            "UPDATE reminders SET active = 0 WHERE id = ?1 AND active = 1",
            params![id],
        )?;
        Ok(count > 0)
    }

    pub fn insert_reminder_log(&self, l: &ReminderLog) -> Result<()> {
        self.conn.execute(
            "INSERT INTO reminder_logs (id, reminder_id, date, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                l.id,
                l.reminder_id,
                l.date.to_string(),
                l.status.to_string(),
                l.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn reminder_logs_in_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<ReminderLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, reminder_id, date, status, created_at
             FROM reminder_logs WHERE date >= ?1 AND date <= ?2 ORDER BY date, created_at",
        )?;
        let rows = stmt.query_map(params![from.to_string(), to.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut logs = Vec::new();
        for row in rows {
            let (id, reminder_id, date, status, created_at) = row?;
            logs.push(ReminderLog {
                id,
                reminder_id,
                date: date.parse()?,
                status: status.parse()?,
                created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
            });
        }
        Ok(logs)
    }
}
