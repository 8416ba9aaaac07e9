use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::params;

use crate::models::ExerciseLog;

use super::Database;

struct ExerciseRow {
    id: String,
    date: String,
    exercise: String,
    muscle_group: String,
    sets: u32,
    reps: u32,
    weight: Option<f64>,
    duration_min: Option<f64>,
    note: Option<String>,
    created_at: String,
}

fn row_to_exercise(r: ExerciseRow) -> Result<ExerciseLog> {
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    Ok(ExerciseLog {
        id: r.id,
        date: r.date.parse()?,
        exercise: r.exercise,
        muscle_group: r.muscle_group,
        sets: r.sets,
        reps: r.reps,
        weight: r.weight,
        duration_min: r.duration_min,
        note: r.note,
        created_at,
    })
}

const SELECT_COLS: &str =
    "id, date, exercise, muscle_group, sets, reps, weight, duration_min, note, created_at";

macro_rules! map_row {
    ($row:expr) => {
        Ok(ExerciseRow {
            id: $row.get(0)?,
            date: $row.get(1)?,
            exercise: $row.get(2)?,
            muscle_group: $row.get(3)?,
            sets: $row.get(4)?,
            reps: $row.get(5)?,
            weight: $row.get(6)?,
            duration_min: $row.get(7)?,
            note: $row.get(8)?,
            created_at: $row.get(9)?,
        })
    };
}

impl Database {
    pub fn insert_exercise(&self, e: &ExerciseLog) -> Result<()> {
        self.conn.execute(
            "INSERT INTO exercise_logs (id, date, exercise, muscle_group, sets, reps, weight, duration_min, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                e.id,
                e.date.to_string(),
                e.exercise,
                e.muscle_group,
                e.sets,
                e.reps,
                e.weight,
                e.duration_min,
                e.note,
                e.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn delete_exercise(&self, id: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM exercise_logs WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }

    /// Most recent entries first, optionally limited.
    pub fn list_exercises(&self, limit: Option<u32>) -> Result<Vec<ExerciseLog>> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM exercise_logs ORDER BY date DESC, created_at DESC LIMIT ?1"
        );
        let limit = limit.map(i64::from).unwrap_or(-1);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit], |row| map_row!(row))?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(row_to_exercise(row?)?);
        }
        Ok(logs)
    }

    /// Entries with `from <= date <= to`, oldest first.
    pub fn exercises_in_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<ExerciseLog>> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM exercise_logs
             WHERE date >= ?1 AND date <= ?2 ORDER BY date, created_at"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![from.to_string(), to.to_string()], |row| {
            map_row!(row)
        })?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(row_to_exercise(row?)?);
        }
        Ok(logs)
    }

    /// Every distinct day with at least one exercise entry, most recent first.
    pub fn distinct_exercise_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT date FROM exercise_logs ORDER BY date DESC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut dates = Vec::new();
        for row in rows {
            dates.push(row?.parse()?);
        }
        Ok(dates)
    }

    pub fn count_exercises(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM exercise_logs", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Distinct non-empty muscle groups, case-folded.
    pub fn distinct_muscle_groups(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT lower(trim(muscle_group)) AS g FROM exercise_logs
             WHERE trim(muscle_group) != '' ORDER BY g",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut groups = Vec::new();
        for row in rows {
            groups.push(row?);
        }
        Ok(groups)
    }
}
