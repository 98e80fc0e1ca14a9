//! Breathing pattern definition.
//!
//! A pattern describes one breathing cycle (inhale, optional hold, exhale,
//! optional post-exhale hold, all in seconds) and how many cycles a routine
//! runs. Pattern names are unique across the system.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::validators::{count, required, required_text};
use crate::domain::foundation::{
    PatternId, Record, Timestamp, UniqueKey, ValidationErrors, Violation,
};

/// Unique index over pattern names.
pub const PATTERN_NAME_INDEX: &str = "breathing_patterns.name";

/// Raw, unvalidated pattern input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingPatternDraft {
    pub name: Option<String>,
    pub inhale: Option<i64>,
    pub hold: Option<i64>,
    pub exhale: Option<i64>,
    pub post_exhale_hold: Option<i64>,
    pub cycles: Option<i64>,
}

/// A validated breathing pattern.
///
/// # Invariants
///
/// - `name` is trimmed, non-empty and unique
/// - `inhale`, `exhale` and `cycles` are at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingPattern {
    id: PatternId,
    name: String,
    inhale: u32,
    hold: Option<u32>,
    exhale: u32,
    post_exhale_hold: Option<u32>,
    cycles: u32,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl BreathingPattern {
    /// Returns every violation of the draft; empty means valid.
    pub fn validate(draft: &BreathingPatternDraft) -> ValidationErrors {
        Self::from_draft(draft).err().unwrap_or_default()
    }

    /// Builds a pattern from raw input, collecting every violation.
    pub fn from_draft(draft: &BreathingPatternDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.check("name", required_text(draft.name.as_deref()));
        let inhale = errors.check("inhale", required_count(draft.inhale));
        let exhale = errors.check("exhale", required_count(draft.exhale));
        let cycles = errors.check("cycles", required_count(draft.cycles));
        let hold = errors.check("hold", draft.hold.map(|v| count(v, 0)).transpose());
        let post_exhale_hold = errors.check(
            "postExhaleHold",
            draft.post_exhale_hold.map(|v| count(v, 0)).transpose(),
        );

        match (name, inhale, exhale, cycles, hold, post_exhale_hold) {
            (
                Some(name),
                Some(inhale),
                Some(exhale),
                Some(cycles),
                Some(hold),
                Some(post_exhale_hold),
            ) if errors.is_empty() => Ok(Self {
                id: PatternId::new(),
                name,
                inhale,
                hold,
                exhale,
                post_exhale_hold,
                cycles,
                created_at: None,
                updated_at: None,
            }),
            _ => Err(errors),
        }
    }

    pub fn id(&self) -> PatternId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inhale(&self) -> u32 {
        self.inhale
    }

    pub fn hold(&self) -> Option<u32> {
        self.hold
    }

    pub fn exhale(&self) -> u32 {
        self.exhale
    }

    pub fn post_exhale_hold(&self) -> Option<u32> {
        self.post_exhale_hold
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    /// Length of one cycle in seconds.
    pub fn cycle_duration_secs(&self) -> u64 {
        u64::from(self.inhale)
            + u64::from(self.hold.unwrap_or(0))
            + u64::from(self.exhale)
            + u64::from(self.post_exhale_hold.unwrap_or(0))
    }

    /// Length of the full routine in seconds.
    pub fn total_duration_secs(&self) -> u64 {
        self.cycle_duration_secs() * u64::from(self.cycles)
    }
}

fn required_count(value: Option<i64>) -> Result<u32, Violation> {
    required(value).and_then(|v| count(v, 1))
}

impl Record for BreathingPattern {
    type Id = PatternId;
    const COLLECTION: &'static str = "breathing_patterns";

    fn id(&self) -> PatternId {
        self.id
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::new(PATTERN_NAME_INDEX, self.name.clone())]
    }

    fn stamp(&mut self, created_at: Timestamp, updated_at: Timestamp) {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
    }

    fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }
}
