//! Stress log entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::validators::{
    optional_text, range, required, required_reference, trimmed_list,
};
use crate::domain::foundation::{Record, StressLogId, Timestamp, UserId, ValidationErrors};
use crate::domain::scale::{scale_category, Mood, StressLevel};

/// Lowest accepted stress level.
pub const MIN_STRESS_LEVEL: i64 = 1;
/// Highest accepted stress level.
pub const MAX_STRESS_LEVEL: i64 = 10;
/// Maximum number of triggers per entry.
pub const MAX_TRIGGERS: usize = 5;
/// Maximum number of symptoms per entry.
pub const MAX_SYMPTOMS: usize = 10;
/// Maximum characters per trigger or symptom.
pub const MAX_TAG_LENGTH: usize = 100;
/// Maximum characters of free-form notes.
pub const MAX_NOTES_LENGTH: usize = 1000;

/// Raw, unvalidated stress log input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressLogDraft {
    pub user_id: Option<String>,
    pub level: Option<i64>,
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
    pub mood: Option<String>,
}

/// One stress logging event.
///
/// # Invariants
///
/// - `level` is within 1-10
/// - at most 5 triggers and 10 symptoms, each trimmed and at most 100 chars
/// - `notes`, when present, is trimmed and at most 1000 chars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressLog {
    id: StressLogId,
    user_id: UserId,
    level: u8,
    date: Option<Timestamp>,
    triggers: Vec<String>,
    symptoms: Vec<String>,
    notes: Option<String>,
    mood: Option<Mood>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl StressLog {
    /// Returns every violation of the draft; empty means valid.
    pub fn validate(draft: &StressLogDraft) -> ValidationErrors {
        Self::from_draft(draft).err().unwrap_or_default()
    }

    /// Builds an entry from raw input.
    ///
    /// A single violation anywhere, including one array element, fails the
    /// whole entry; every violation is reported.
    pub fn from_draft(draft: &StressLogDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_id = errors.check("userId", required_reference(draft.user_id.as_deref()));
        let level = errors.check(
            "level",
            required(draft.level).and_then(|v| range(v, MIN_STRESS_LEVEL, MAX_STRESS_LEVEL)),
        );
        let triggers = trimmed_list(
            &mut errors,
            "triggers",
            &draft.triggers,
            MAX_TRIGGERS,
            MAX_TAG_LENGTH,
        );
        let symptoms = trimmed_list(
            &mut errors,
            "symptoms",
            &draft.symptoms,
            MAX_SYMPTOMS,
            MAX_TAG_LENGTH,
        );
        let notes = errors.check("notes", optional_text(draft.notes.as_deref(), MAX_NOTES_LENGTH));
        let mood = errors.check(
            "mood",
            draft.mood.as_deref().map(scale_category::<Mood>).transpose(),
        );

        match (user_id, level, notes, mood) {
            (Some(user_id), Some(level), Some(notes), Some(mood)) if errors.is_empty() => {
                Ok(Self {
                    id: StressLogId::new(),
                    user_id,
                    level: level as u8,
                    date: draft.date,
                    triggers,
                    symptoms,
                    notes,
                    mood,
                    created_at: None,
                    updated_at: None,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn id(&self) -> StressLogId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// When the stress was felt; falls back to the creation time.
    pub fn date(&self) -> Option<Timestamp> {
        self.date.or(self.created_at)
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    /// Named bucket of the raw level.
    pub fn bucket(&self) -> StressLevel {
        StressLevel::from_score(f64::from(self.level))
    }
}

impl Record for StressLog {
    type Id = StressLogId;
    const COLLECTION: &'static str = "stress_logs";

    fn id(&self) -> StressLogId {
        self.id
    }

    fn stamp(&mut self, created_at: Timestamp, updated_at: Timestamp) {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
    }

    fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }
}
