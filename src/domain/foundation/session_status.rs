//! SessionStatus enum for tracking the lifecycle of breathing sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClosedSet, StateMachine};

/// Lifecycle status of a breathing practice session.
///
/// ```text
/// IN_PROGRESS ──► COMPLETED
///     │  ▲
///     ▼  │ (resume)
/// INTERRUPTED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    InProgress,
    Interrupted,
    Completed,
}

impl SessionStatus {
    /// Returns true if the session can still be modified.
    pub fn is_mutable(&self) -> bool {
        !matches!(self, SessionStatus::Completed)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (InProgress, Completed) | (InProgress, Interrupted) | (Interrupted, InProgress)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            InProgress => vec![Completed, Interrupted],
            Interrupted => vec![InProgress],
            Completed => vec![],
        }
    }
}

impl ClosedSet for SessionStatus {
    const ALL: &'static [Self] = &[
        SessionStatus::InProgress,
        SessionStatus::Interrupted,
        SessionStatus::Completed,
    ];

    fn label(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "IN_PROGRESS",
            SessionStatus::Interrupted => "INTERRUPTED",
            SessionStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
