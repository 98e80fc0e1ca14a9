//! Ordinal scales - closed, valued category sets.
//!
//! Two scales are registered: [`Mood`] and [`StressLevel`]. Each category
//! is a variant of its scale's enum; numeric values come from the enum and
//! the shared [`ScaleRegistry`] provides label lookup and ordering.

mod mood;
mod registry;
mod stress_level;

pub use mood::Mood;
pub use registry::{registry, ScaleRegistry};
pub use stress_level::StressLevel;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::validators::trim;
use crate::domain::foundation::{ClosedSet, Violation};

/// Identifies one of the registered scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Mood,
    StressLevel,
}

impl ScaleKind {
    /// Returns the scale name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            ScaleKind::Mood => "mood",
            ScaleKind::StressLevel => "stress level",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A closed set of categories with a numeric valuation.
pub trait OrdinalScale: ClosedSet {
    /// The scale this enum implements.
    const KIND: ScaleKind;

    /// Numeric value of the category; monotonic with severity.
    fn value(&self) -> u8;
}

/// A category on any registered scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scale", content = "category", rename_all = "snake_case")]
pub enum Category {
    Mood(Mood),
    Stress(StressLevel),
}

impl Category {
    /// Returns the scale this category belongs to.
    pub fn scale(&self) -> ScaleKind {
        match self {
            Category::Mood(_) => Mood::KIND,
            Category::Stress(_) => StressLevel::KIND,
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        match self {
            Category::Mood(m) => m.value(),
            Category::Stress(s) => s.value(),
        }
    }

    /// Returns the category label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mood(m) => m.label(),
            Category::Stress(s) => s.label(),
        }
    }
}

/// A label that is not part of the requested scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{label}' is not a {scale} category")]
pub struct UnknownCategory {
    pub scale: ScaleKind,
    pub label: String,
}

impl From<UnknownCategory> for Violation {
    fn from(err: UnknownCategory) -> Self {
        Violation::UnknownCategory {
            scale: err.scale.name(),
            label: err.label,
        }
    }
}

/// Validates a category label on the scale `S`, trimming it first.
pub fn scale_category<S: OrdinalScale>(label: &str) -> Result<S, Violation> {
    let label = trim(label);
    S::from_label(&label).ok_or_else(|| {
        Violation::from(UnknownCategory {
            scale: S::KIND,
            label,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn scale_category_accepts_padded_labels() {
        assert_eq!(scale_category::<Mood>(" CALM "), Ok(Mood::Calm));
    }

    #[test]
    fn scale_category_reports_unknown_category() {
        let err = scale_category::<StressLevel>("EXTREME").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownCategory);
        assert_eq!(err.to_string(), "'EXTREME' is not a stress level category");
    }

    #[test]
    fn category_knows_its_scale() {
        assert_eq!(Category::Mood(Mood::Calm).scale(), ScaleKind::Mood);
        assert_eq!(
            Category::Stress(StressLevel::High).scale(),
            ScaleKind::StressLevel
        );
    }
}
