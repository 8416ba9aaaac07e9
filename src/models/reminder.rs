use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Once,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Once => write!(f, "once"),
        }
    }
}

impl FromStr for Frequency {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "once" => Ok(Self::Once),
            _ => anyhow::bail!("invalid frequency: {} (expected daily/weekly/once)", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub category: String,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub repeat_days: Vec<Weekday>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(title: String, category: String, frequency: Frequency, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            category,
            frequency,
            repeat_days: Vec::new(),
            start_date,
            end_date: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Approximate number of occurrences in a 7-day window.
    ///
    /// Daily reminders always count 7 and weekly ones count their repeat days,
    /// regardless of start/end dates. Only one-time reminders look at the window.
    pub fn scheduled_in_week(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        match self.frequency {
            Frequency::Daily => 7,
            Frequency::Weekly => self.repeat_days.len() as u32,
            Frequency::Once => u32::from(self.start_date >= from && self.start_date <= to),
        }
    }
}

/// Parse a comma-separated weekday list such as `mon,wed,fri`.
pub fn parse_repeat_days(input: &str) -> anyhow::Result<Vec<Weekday>> {
    let mut days = Vec::new();
    for part in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let day: Weekday = part
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid weekday: {}", part))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    days.sort_by_key(|d| d.num_days_from_monday());
    Ok(days)
}
