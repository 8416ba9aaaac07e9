use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::db::Database;
use crate::models::record::{PersonalRecord, RecordType};

/// A freshly logged strength set, as seen by the record tracker.
#[derive(Debug, Clone)]
pub struct StrengthEntry<'a> {
    pub exercise: &'a str,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f64>,
    pub source_id: &'a str,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordUpdate {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: f64,
    pub previous_value: Option<f64>,
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// Canonical record key for an exercise name: trimmed, lowercased, single-spaced.
pub fn normalize_exercise(name: &str) -> String {
    whitespace()
        .replace_all(name.trim(), " ")
        .to_lowercase()
}

/// Epley one-rep-max estimate, rounded to one decimal.
pub fn estimated_1rm(weight: f64, reps: u32) -> f64 {
    round1(weight * (1.0 + f64::from(reps) / 30.0))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Candidate values for each record type, or `None` if the entry carries no load.
pub fn candidates(entry: &StrengthEntry<'_>) -> Option<[(RecordType, f64); 3]> {
    let weight = entry.weight.filter(|w| *w > 0.0)?;
    let volume = f64::from(entry.sets) * f64::from(entry.reps) * weight;
    Some([
        (RecordType::MaxWeight, weight),
        (RecordType::MaxVolume, volume),
        (RecordType::Estimated1Rm, estimated_1rm(weight, entry.reps)),
    ])
}

/// Compare a new entry against stored records and write strict improvements.
///
/// Each write is a compare-and-swap against the value read just before it, so
/// a concurrent writer on the same key surfaces as `StoreError::Conflict`.
pub fn evaluate(db: &Database, entry: &StrengthEntry<'_>) -> Result<Vec<RecordUpdate>> {
    assert!(
        !entry.exercise.trim().is_empty(),
        "strength entry without exercise name"
    );
    assert!(
        entry.sets > 0 && entry.reps > 0,
        "strength entry needs positive sets and reps"
    );

    let Some(values) = candidates(entry) else {
        return Ok(Vec::new());
    };
    let exercise = normalize_exercise(entry.exercise);

    let mut updates = Vec::new();
    for (record_type, value) in values {
        let existing = db.get_record(&exercise, record_type)?;
        let previous_value = existing.as_ref().map(|r| r.value);
        if let Some(old) = previous_value
            && value <= old
        {
            continue;
        }

        let record = PersonalRecord {
            exercise: exercise.clone(),
            record_type,
            value,
            reps: (record_type == RecordType::MaxWeight).then_some(entry.reps),
            achieved_on: entry.date,
            previous_value,
            source_log_id: entry.source_id.to_string(),
        };
        db.put_record(&record, previous_value)?;
        tracing::info!(
            exercise = %exercise,
            record_type = %record_type,
            value,
            previous = ?previous_value,
            "new personal record"
        );
        updates.push(RecordUpdate {
            record_type,
            value,
            previous_value,
        });
    }
    Ok(updates)
}

/// Stored records, optionally for a single exercise (name is normalized).
pub fn list_records(db: &Database, exercise: Option<&str>) -> Result<Vec<PersonalRecord>> {
    let normalized = exercise.map(normalize_exercise);
    db.list_records(normalized.as_deref())
}
