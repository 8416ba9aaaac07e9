use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

pub struct GradeBand {
    pub grade: Grade,
    pub min_percent: f64,
    pub anchor: f64,
}

/// Ordered from best to worst; the first band whose minimum is met wins.
pub const GRADE_TABLE: [GradeBand; 5] = [
    GradeBand { grade: Grade::A, min_percent: 90.0, anchor: 100.0 },
    GradeBand { grade: Grade::B, min_percent: 75.0, anchor: 80.0 },
    GradeBand { grade: Grade::C, min_percent: 60.0, anchor: 65.0 },
    GradeBand { grade: Grade::D, min_percent: 40.0, anchor: 50.0 },
    GradeBand { grade: Grade::F, min_percent: f64::NEG_INFINITY, anchor: 30.0 },
];

impl Grade {
    pub fn from_percent(percent: f64) -> Self {
        GRADE_TABLE
            .iter()
            .find(|band| percent >= band.min_percent)
            .map(|band| band.grade)
            .unwrap_or(Grade::F)
    }

    /// Numeric stand-in used when combining grades into an overall score.
    pub fn anchor(self) -> f64 {
        GRADE_TABLE
            .iter()
            .find(|band| band.grade == self)
            .map(|band| band.anchor)
            .unwrap_or(30.0)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
            Self::F => write!(f, "F"),
        }
    }
}
