use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    MaxWeight,
    MaxVolume,
    #[serde(rename = "estimated_1rm")]
    Estimated1Rm,
}

impl RecordType {
    pub const ALL: [RecordType; 3] = [Self::MaxWeight, Self::MaxVolume, Self::Estimated1Rm];
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MaxWeight => write!(f, "max_weight"),
            Self::MaxVolume => write!(f, "max_volume"),
            Self::Estimated1Rm => write!(f, "estimated_1rm"),
        }
    }
}

impl FromStr for RecordType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "max_weight" => Ok(Self::MaxWeight),
            "max_volume" => Ok(Self::MaxVolume),
            "estimated_1rm" => Ok(Self::Estimated1Rm),
            _ => anyhow::bail!(
                "invalid record type: {} (expected max_weight/max_volume/estimated_1rm)",
                s
            ),
        }
    }
}

/// Best value seen for one (exercise, record type) key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalRecord {
    pub exercise: String,
    pub record_type: RecordType,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    pub achieved_on: NaiveDate,
    pub previous_value: Option<f64>,
    pub source_log_id: String,
}
