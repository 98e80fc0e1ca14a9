//! Breathing session aggregate.
//!
//! A session is one practice run of a named pattern by a user. It starts
//! `IN_PROGRESS`, may be interrupted and resumed, and is frozen once
//! `COMPLETED`.
//!
//! Status legality is decided by [`SessionStatus`] alone. Cycle and time
//! consistency is a separate rule set ([`BreathingSession::check`]) that
//! runs at the same save boundary.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::validators::{count, range, required, required_reference, required_text};
use crate::domain::foundation::{
    BreathingSessionId, IllegalTransition, Record, SessionStatus, StateMachine, Timestamp, UserId,
    ValidationErrors, Violation,
};

/// Lowest accepted before/after stress rating.
pub const MIN_SESSION_STRESS: i64 = 0;

/// Highest accepted before/after stress rating.
pub const MAX_SESSION_STRESS: i64 = 10;

/// Raw, unvalidated session input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingSessionDraft {
    pub user_id: Option<String>,
    pub pattern_name: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub target_cycles: Option<i64>,
    pub completed_cycles: Option<i64>,
    pub stress_level_before: Option<i64>,
    pub stress_level_after: Option<i64>,
}

/// A breathing practice session.
///
/// # Invariants
///
/// - `0 <= completed_cycles <= target_cycles`, `target_cycles >= 1`
/// - stress ratings, when present, are within 0-10
/// - `end_time`, when present, is not before `start_time`
/// - a `COMPLETED` session never changes again
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingSession {
    id: BreathingSessionId,
    user_id: UserId,
    pattern_name: String,
    start_time: Timestamp,
    end_time: Option<Timestamp>,
    target_cycles: u32,
    completed_cycles: u32,
    stress_level_before: Option<u8>,
    stress_level_after: Option<u8>,
    status: SessionStatus,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl BreathingSession {
    /// Returns every violation of the draft; empty means valid.
    pub fn validate(draft: &BreathingSessionDraft) -> ValidationErrors {
        Self::from_draft(draft).err().unwrap_or_default()
    }

    /// Builds a new `IN_PROGRESS` session from raw input.
    pub fn from_draft(draft: &BreathingSessionDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_id = errors.check("userId", required_reference(draft.user_id.as_deref()));
        let pattern_name = errors.check("patternName", required_text(draft.pattern_name.as_deref()));
        let start_time = errors.check("startTime", required(draft.start_time));
        let target_cycles = errors.check(
            "targetCycles",
            required(draft.target_cycles).and_then(|v| count(v, 1)),
        );
        let completed_cycles = errors.check(
            "completedCycles",
            completed_within(draft.completed_cycles.unwrap_or(0), target_cycles),
        );
        let stress_level_before =
            errors.check("stressLevelBefore", stress_rating(draft.stress_level_before));
        let stress_level_after =
            errors.check("stressLevelAfter", stress_rating(draft.stress_level_after));
        if let (Some(start), Some(end)) = (start_time, draft.end_time) {
            errors.check("endTime", end_not_before(start, end));
        }

        match (
            user_id,
            pattern_name,
            start_time,
            target_cycles,
            completed_cycles,
            stress_level_before,
            stress_level_after,
        ) {
            (
                Some(user_id),
                Some(pattern_name),
                Some(start_time),
                Some(target_cycles),
                Some(completed_cycles),
                Some(stress_level_before),
                Some(stress_level_after),
            ) if errors.is_empty() => Ok(Self {
                id: BreathingSessionId::new(),
                user_id,
                pattern_name,
                start_time,
                end_time: draft.end_time,
                target_cycles,
                completed_cycles,
                stress_level_before,
                stress_level_after,
                status: SessionStatus::InProgress,
                created_at: None,
                updated_at: None,
            }),
            _ => Err(errors),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> BreathingSessionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn pattern_name(&self) -> &str {
        &self.pattern_name
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn end_time(&self) -> Option<Timestamp> {
        self.end_time
    }

    pub fn target_cycles(&self) -> u32 {
        self.target_cycles
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    pub fn stress_level_before(&self) -> Option<u8> {
        self.stress_level_before
    }

    pub fn stress_level_after(&self) -> Option<u8> {
        self.stress_level_after
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    /// Stress reduction over the session (positive means calmer).
    pub fn stress_delta(&self) -> Option<i16> {
        match (self.stress_level_before, self.stress_level_after) {
            (Some(before), Some(after)) => Some(i16::from(before) - i16::from(after)),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the session to `requested`, returning the previous status.
    ///
    /// Resuming an interrupted session keeps its completed cycles.
    pub fn transition(&mut self, requested: SessionStatus) -> Result<SessionStatus, IllegalTransition> {
        let next = self.status.transition_to(requested)?;
        Ok(std::mem::replace(&mut self.status, next))
    }

    /// Records progress and/or the closing stress rating.
    ///
    /// Every violation is collected; nothing changes unless all pass.
    pub fn record_progress(
        &mut self,
        completed_cycles: Option<i64>,
        stress_level_after: Option<i64>,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.status.is_mutable() {
            errors.add(
                "status",
                Violation::InvalidFormat {
                    reason: format!("session is {} and can no longer change", self.status),
                },
            );
            return Err(errors);
        }

        let completed = completed_cycles
            .map(|v| errors.check("completedCycles", completed_within(v, Some(self.target_cycles))))
            .unwrap_or(Some(self.completed_cycles));
        let after = stress_level_after
            .map(|v| errors.check("stressLevelAfter", stress_rating(Some(v))))
            .unwrap_or(Some(self.stress_level_after));

        match (completed, after) {
            (Some(completed), Some(after)) if errors.is_empty() => {
                self.completed_cycles = completed;
                self.stress_level_after = after;
                Ok(())
            }
            _ => Err(errors),
        }
    }

    /// Sets the end time; consistency with the start time is checked by
    /// [`check`](Self::check).
    pub fn set_end_time(&mut self, end_time: Timestamp) {
        self.end_time = Some(end_time);
    }

    /// Cycle, rating and time consistency evaluated at the save boundary.
    pub fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check("targetCycles", count(i64::from(self.target_cycles), 1));
        errors.check(
            "completedCycles",
            completed_within(i64::from(self.completed_cycles), Some(self.target_cycles)),
        );
        errors.check(
            "stressLevelBefore",
            stress_rating(self.stress_level_before.map(i64::from)),
        );
        errors.check(
            "stressLevelAfter",
            stress_rating(self.stress_level_after.map(i64::from)),
        );
        if let Some(end) = self.end_time {
            errors.check("endTime", end_not_before(self.start_time, end));
        }
        errors
    }
}

/// `0 <= completed <= target`, with `target` taken from the sibling field.
fn completed_within(completed: i64, target: Option<u32>) -> Result<u32, Violation> {
    match target {
        Some(target) => range(completed, 0, i64::from(target)).map(|v| v as u32),
        None => count(completed, 0),
    }
}

fn stress_rating(value: Option<i64>) -> Result<Option<u8>, Violation> {
    value
        .map(|v| range(v, MIN_SESSION_STRESS, MAX_SESSION_STRESS).map(|v| v as u8))
        .transpose()
}

fn end_not_before(start: Timestamp, end: Timestamp) -> Result<(), Violation> {
    if end.is_before(&start) {
        return Err(Violation::InvalidFormat {
            reason: "must not be before startTime".to_string(),
        });
    }
    Ok(())
}

impl Record for BreathingSession {
    type Id = BreathingSessionId;
    const COLLECTION: &'static str = "breathing_sessions";

    fn id(&self) -> BreathingSessionId {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use proptest::prelude::*;

    fn start() -> Timestamp {
        Timestamp::from_unix_secs(1_700_000_000).unwrap()
    }

    fn draft() -> BreathingSessionDraft {
        BreathingSessionDraft {
            user_id: Some(UserId::new().to_string()),
            pattern_name: Some("Box Breathing".to_string()),
            start_time: Some(start()),
            target_cycles: Some(5),
            ..Default::default()
        }
    }

    fn session() -> BreathingSession {
        BreathingSession::from_draft(&draft()).unwrap()
    }

    // Construction

    #[test]
    fn new_session_starts_in_progress_with_zero_cycles() {
        let session = session();
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.completed_cycles(), 0);
        assert!(session.end_time().is_none());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let errors = BreathingSession::validate(&BreathingSessionDraft::default());
        for field in ["userId", "patternName", "startTime", "targetCycles"] {
            assert!(errors.has(field, ErrorCode::MissingField), "{} missing", field);
        }
    }

    #[test]
    fn malformed_user_id_is_an_invalid_reference() {
        let errors = BreathingSession::validate(&BreathingSessionDraft {
            user_id: Some("user-123".to_string()),
            ..draft()
        });
        assert!(errors.has("userId", ErrorCode::InvalidReference));
    }

    #[test]
    fn completed_cycles_cannot_exceed_target() {
        let errors = BreathingSession::validate(&BreathingSessionDraft {
            completed_cycles: Some(6),
            ..draft()
        });
        assert!(errors.has("completedCycles", ErrorCode::OutOfRange));
    }

    #[test]
    fn stress_ratings_must_be_within_zero_to_ten() {
        let errors = BreathingSession::validate(&BreathingSessionDraft {
            stress_level_before: Some(11),
            stress_level_after: Some(-1),
            ..draft()
        });
        assert!(errors.has("stressLevelBefore", ErrorCode::OutOfRange));
        assert!(errors.has("stressLevelAfter", ErrorCode::OutOfRange));

        let ok = BreathingSession::validate(&BreathingSessionDraft {
            stress_level_before: Some(0),
            stress_level_after: Some(10),
            ..draft()
        });
        assert!(ok.is_empty());
    }

    #[test]
    fn end_time_before_start_is_rejected() {
        let errors = BreathingSession::validate(&BreathingSessionDraft {
            end_time: Some(start().plus_secs(-60)),
            ..draft()
        });
        assert!(errors.has("endTime", ErrorCode::InvalidFormat));
    }

    // Transitions

    #[test]
    fn complete_from_in_progress() {
        let mut session = session();
        let previous = session.transition(SessionStatus::Completed).unwrap();
        assert_eq!(previous, SessionStatus::InProgress);
        assert_eq!(session.status(), SessionStatus::Completed);
    }

    #[test]
    fn resume_preserves_completed_cycles() {
        let mut session = session();
        session.record_progress(Some(3), None).unwrap();
        session.transition(SessionStatus::Interrupted).unwrap();
        session.transition(SessionStatus::InProgress).unwrap();
        assert_eq!(session.completed_cycles(), 3);
    }

    #[test]
    fn interrupted_cannot_complete_directly() {
        let mut session = session();
        session.transition(SessionStatus::Interrupted).unwrap();
        assert!(session.transition(SessionStatus::Completed).is_err());
        assert_eq!(session.status(), SessionStatus::Interrupted);
    }

    #[test]
    fn completed_session_is_write_once() {
        let mut session = session();
        session.transition(SessionStatus::Completed).unwrap();
        assert!(session.transition(SessionStatus::Completed).is_err());
        assert!(session.transition(SessionStatus::InProgress).is_err());
        assert!(session.record_progress(Some(1), None).is_err());
    }

    // Progress

    #[test]
    fn record_progress_checks_against_target() {
        let mut session = session();
        let errors = session.record_progress(Some(9), Some(42)).unwrap_err();
        assert!(errors.has("completedCycles", ErrorCode::OutOfRange));
        assert!(errors.has("stressLevelAfter", ErrorCode::OutOfRange));
        assert_eq!(session.completed_cycles(), 0);
    }

    #[test]
    fn stress_delta_compares_ratings() {
        let mut session = BreathingSession::from_draft(&BreathingSessionDraft {
            stress_level_before: Some(8),
            ..draft()
        })
        .unwrap();
        assert_eq!(session.stress_delta(), None);
        session.record_progress(None, Some(3)).unwrap();
        assert_eq!(session.stress_delta(), Some(5));
    }

    #[test]
    fn check_flags_end_time_set_after_construction() {
        let mut session = session();
        session.set_end_time(start().plus_secs(-1));
        assert!(session.check().has("endTime", ErrorCode::InvalidFormat));
        session.set_end_time(start().plus_secs(300));
        assert!(session.check().is_empty());
    }

    proptest! {
        #[test]
        fn completed_within_target_never_fails(target in 1i64..500, pick in 0.0f64..=1.0) {
            let completed = ((target as f64) * pick).floor() as i64;
            let errors = BreathingSession::validate(&BreathingSessionDraft {
                target_cycles: Some(target),
                completed_cycles: Some(completed),
                ..draft()
            });
            prop_assert!(errors.get("completedCycles").is_empty());
        }

        #[test]
        fn completed_above_target_always_fails(target in 1i64..500, extra in 1i64..500) {
            let errors = BreathingSession::validate(&BreathingSessionDraft {
                target_cycles: Some(target),
                completed_cycles: Some(target + extra),
                ..draft()
            });
            prop_assert!(errors.has("completedCycles", ErrorCode::OutOfRange));
        }
    }
}
