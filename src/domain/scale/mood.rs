//! Mood ordinal scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OrdinalScale, ScaleKind};
use crate::domain::foundation::ClosedSet;

/// Self-reported mood, valued 1 (worst) to 5 (best).
///
/// The affect labels are aliases of the core five-point scale:
/// `Stressed` = `VeryNegative`, `Anxious` = `Negative`, `Calm` = `Positive`,
/// `Peaceful` = `VeryPositive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
    Anxious,
    Stressed,
    Calm,
    Peaceful,
}

impl ClosedSet for Mood {
    const ALL: &'static [Self] = &[
        Mood::VeryNegative,
        Mood::Negative,
        Mood::Neutral,
        Mood::Positive,
        Mood::VeryPositive,
        Mood::Anxious,
        Mood::Stressed,
        Mood::Calm,
        Mood::Peaceful,
    ];

    fn label(&self) -> &'static str {
        match self {
            Mood::VeryNegative => "VERY_NEGATIVE",
            Mood::Negative => "NEGATIVE",
            Mood::Neutral => "NEUTRAL",
            Mood::Positive => "POSITIVE",
            Mood::VeryPositive => "VERY_POSITIVE",
            Mood::Anxious => "ANXIOUS",
            Mood::Stressed => "STRESSED",
            Mood::Calm => "CALM",
            Mood::Peaceful => "PEACEFUL",
        }
    }
}

impl OrdinalScale for Mood {
    const KIND: ScaleKind = ScaleKind::Mood;

    fn value(&self) -> u8 {
        match self {
            Mood::VeryNegative | Mood::Stressed => 1,
            Mood::Negative | Mood::Anxious => 2,
            Mood::Neutral => 3,
            Mood::Positive | Mood::Calm => 4,
            Mood::VeryPositive | Mood::Peaceful => 5,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
