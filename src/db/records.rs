use anyhow::Result;
use rusqlite::params;

use crate::models::record::{PersonalRecord, RecordType};

use super::{Database, StoreError, is_constraint_violation};

struct RecordRow {
    exercise: String,
    record_type: String,
    value: f64,
    reps: Option<u32>,
    achieved_on: String,
    previous_value: Option<f64>,
    source_log_id: String,
}

fn row_to_record(r: RecordRow) -> Result<PersonalRecord> {
    Ok(PersonalRecord {
        exercise: r.exercise,
        record_type: r.record_type.parse()?,
        value: r.value,
        reps: r.reps,
        achieved_on: r.achieved_on.parse()?,
        previous_value: r.previous_value,
        source_log_id: r.source_log_id,
    })
}

const SELECT_COLS: &str =
    "exercise, record_type, value, reps, achieved_on, previous_value, source_log_id";

macro_rules! map_row {
    ($row:expr) => {
        Ok(RecordRow {
            exercise: $row.get(0)?,
            record_type: $row.get(1)?,
            value: $row.get(2)?,
            reps: $row.get(3)?,
            achieved_on: $row.get(4)?,
            previous_value: $row.get(5)?,
            source_log_id: $row.get(6)?,
        })
    };
}

impl Database {
    pub fn get_record(&self, exercise: &str, record_type: RecordType) -> Result<Option<PersonalRecord>> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM personal_records WHERE exercise = ?1 AND record_type = ?2"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query_map(params![exercise, record_type.to_string()], |row| {
            map_row!(row)
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_record(row?)?)),
            None => Ok(None),
        }
    }

    /// Compare-and-swap write of a record.
    ///
    /// `observed` is the value read before deciding to write (`None` when no
    /// record existed). If the stored row no longer matches it, nothing is
    /// written and `StoreError::Conflict` is returned.
    pub fn put_record(&self, rec: &PersonalRecord, observed: Option<f64>) -> Result<()> {
        let key = format!("{}/{}", rec.exercise, rec.record_type);
        match observed {
            None => {
                let inserted = self.conn.execute(
                    "INSERT INTO personal_records (exercise, record_type, value, reps, achieved_on, previous_value, source_log_id)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        rec.exercise,
                        rec.record_type.to_string(),
                        rec.value,
                        rec.reps,
                        rec.achieved_on.to_string(),
                        rec.previous_value,
                        rec.source_log_id,
                    ],
                );
                match inserted {
                    Ok(_) => Ok(()),
                    Err(e) if is_constraint_violation(&e) => Err(StoreError::Conflict { key }.into()),
                    Err(e) => Err(e.into()),
                }
            }
            Some(old) => {
                let count = self.conn.execute(
                    "UPDATE personal_records
                     SET value = ?3, reps = ?4, achieved_on = ?5, previous_value = ?6, source_log_id = ?7
                     WHERE exercise = ?1 AND record_type = ?2 AND value = ?8",
                    params![
                        rec.exercise,
                        rec.record_type.to_string(),
                        rec.value,
                        rec.reps,
                        rec.achieved_on.to_string(),
                        rec.previous_value,
                        rec.source_log_id,
                        old,
                    ],
                )?;
                if count == 0 {
                    return Err(StoreError::Conflict { key }.into());
                }
                Ok(())
            }
        }
    }

    pub fn list_records(&self, exercise: Option<&str>) -> Result<Vec<PersonalRecord>> {
        let mut records = Vec::new();
        match exercise {
            Some(name) => {
                let sql = format!(
                    "SELECT {SELECT_COLS} FROM personal_records WHERE exercise = ?1 ORDER BY record_type"
                );
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt.query_map(params![name], |row| map_row!(row))?;
                for row in rows {
                    records.push(row_to_record(row?)?);
                }
            }
            None => {
                let sql = format!(
                    "SELECT {SELECT_COLS} FROM personal_records ORDER BY exercise, record_type"
                );
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt.query_map([], |row| map_row!(row))?;
                for row in rows {
                    records.push(row_to_record(row?)?);
                }
            }
        }
        Ok(records)
    }

    /// Number of distinct exercises holding at least one record.
    pub fn count_record_exercises(&self) -> Result<u32> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(DISTINCT exercise) FROM personal_records",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
