//! Stress level ordinal scale and raw-score bucketing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OrdinalScale, ScaleKind};
use crate::domain::foundation::ClosedSet;

/// Five named buckets over the raw 1-10 stress score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StressLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl StressLevel {
    /// Buckets a raw stress score.
    ///
    /// Upper bounds are inclusive: `<= 2` very low, `<= 4` low, `<= 6`
    /// moderate, `<= 8` high, anything above is very high. Fractional scores
    /// are compared as-is, never rounded, and scores outside 1-10 land in the
    /// outermost buckets. NaN compares false everywhere and lands in
    /// `VeryHigh`.
    pub fn from_score(score: f64) -> Self {
        if score <= 2.0 {
            StressLevel::VeryLow
        } else if score <= 4.0 {
            StressLevel::Low
        } else if score <= 6.0 {
            StressLevel::Moderate
        } else if score <= 8.0 {
            StressLevel::High
        } else {
            StressLevel::VeryHigh
        }
    }
}

impl ClosedSet for StressLevel {
    const ALL: &'static [Self] = &[
        StressLevel::VeryLow,
        StressLevel::Low,
        StressLevel::Moderate,
        StressLevel::High,
        StressLevel::VeryHigh,
    ];

    fn label(&self) -> &'static str {
        match self {
            StressLevel::VeryLow => "VERY_LOW",
            StressLevel::Low => "LOW",
            StressLevel::Moderate => "MODERATE",
            StressLevel::High => "HIGH",
            StressLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

impl OrdinalScale for StressLevel {
    const KIND: ScaleKind = ScaleKind::StressLevel;

    fn value(&self) -> u8 {
        match self {
            StressLevel::VeryLow => 1,
            StressLevel::Low => 2,
            StressLevel::Moderate => 3,
            StressLevel::High => 4,
            StressLevel::VeryHigh => 5,
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
