//! FriendRequestStatus enum for the relationship lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClosedSet, StateMachine};

/// Lifecycle status of a friend request.
///
/// A request starts `pending` and is answered exactly once; both answers
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl FriendRequestStatus {
    /// Returns true if the request still occupies its user pair.
    ///
    /// Rejected requests free the pair for a new request.
    pub fn is_active(&self) -> bool {
        !matches!(self, FriendRequestStatus::Rejected)
    }
}

impl StateMachine for FriendRequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FriendRequestStatus::*;
        matches!((self, target), (Pending, Accepted) | (Pending, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FriendRequestStatus::*;
        match self {
            Pending => vec![Accepted, Rejected],
            Accepted | Rejected => vec![],
        }
    }
}

impl ClosedSet for FriendRequestStatus {
    const ALL: &'static [Self] = &[
        FriendRequestStatus::Pending,
        FriendRequestStatus::Accepted,
        FriendRequestStatus::Rejected,
    ];

    fn label(&self) -> &'static str {
        match self {
            FriendRequestStatus::Pending => "pending",
            FriendRequestStatus::Accepted => "accepted",
            FriendRequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for FriendRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
