//! Friend request aggregate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PairKey;
use crate::domain::foundation::validators::required_reference;
use crate::domain::foundation::{
    FriendRequestId, FriendRequestStatus, IllegalTransition, Record, StateMachine, Timestamp,
    UniqueKey, UserId, ValidationErrors,
};

/// Unique index over the unordered user pair of every non-rejected request.
pub const FRIEND_PAIR_INDEX: &str = "friend_requests.pair";

/// Reasons a friend request candidate is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FriendRequestError {
    #[error("Invalid friend request: {0}")]
    Invalid(ValidationErrors),

    #[error("User {0} cannot send a friend request to themselves")]
    SelfReference(UserId),
}

/// Raw, unvalidated request input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestDraft {
    pub requester_id: Option<String>,
    pub recipient_id: Option<String>,
}

/// A request from one user to befriend another.
///
/// # Invariants
///
/// - `requester_id != recipient_id`
/// - status only moves `pending -> accepted | rejected`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    id: FriendRequestId,
    requester_id: UserId,
    recipient_id: UserId,
    status: FriendRequestStatus,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl FriendRequest {
    /// Returns every field violation of the draft; empty means valid.
    ///
    /// Self-reference is not a field violation and is reported by
    /// [`from_draft`](Self::from_draft).
    pub fn validate(draft: &FriendRequestDraft) -> ValidationErrors {
        Self::parse_parties(draft).err().unwrap_or_default()
    }

    /// Builds a `pending` request from raw input.
    pub fn from_draft(draft: &FriendRequestDraft) -> Result<Self, FriendRequestError> {
        let (requester, recipient) =
            Self::parse_parties(draft).map_err(FriendRequestError::Invalid)?;
        Self::new(requester, recipient)
    }

    /// Creates a `pending` request between two distinct users.
    pub fn new(requester_id: UserId, recipient_id: UserId) -> Result<Self, FriendRequestError> {
        if requester_id == recipient_id {
            return Err(FriendRequestError::SelfReference(requester_id));
        }
        Ok(Self {
            id: FriendRequestId::new(),
            requester_id,
            recipient_id,
            status: FriendRequestStatus::Pending,
            created_at: None,
            updated_at: None,
        })
    }

    fn parse_parties(draft: &FriendRequestDraft) -> Result<(UserId, UserId), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let requester =
            errors.check("requesterId", required_reference(draft.requester_id.as_deref()));
        let recipient =
            errors.check("recipientId", required_reference(draft.recipient_id.as_deref()));
        match (requester, recipient) {
            (Some(requester), Some(recipient)) if errors.is_empty() => Ok((requester, recipient)),
            _ => Err(errors),
        }
    }

    pub fn id(&self) -> FriendRequestId {
        self.id
    }

    pub fn requester_id(&self) -> UserId {
        self.requester_id
    }

    pub fn recipient_id(&self) -> UserId {
        self.recipient_id
    }

    pub fn status(&self) -> FriendRequestStatus {
        self.status
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    /// The canonical, direction-free key of the two users.
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(self.requester_id, self.recipient_id)
    }

    /// Moves the request to `requested`, returning the previous status.
    pub fn transition(
        &mut self,
        requested: FriendRequestStatus,
    ) -> Result<FriendRequestStatus, IllegalTransition> {
        let next = self.status.transition_to(requested)?;
        Ok(std::mem::replace(&mut self.status, next))
    }

    pub fn accept(&mut self) -> Result<FriendRequestStatus, IllegalTransition> {
        self.transition(FriendRequestStatus::Accepted)
    }

    pub fn reject(&mut self) -> Result<FriendRequestStatus, IllegalTransition> {
        self.transition(FriendRequestStatus::Rejected)
    }
}

impl Record for FriendRequest {
    type Id = FriendRequestId;
    const COLLECTION: &'static str = "friend_requests";

    fn id(&self) -> FriendRequestId {
        self.id
    }

    /// Only active requests hold the pair; a rejected one releases it.
    fn unique_keys(&self) -> Vec<UniqueKey> {
        if self.status.is_active() {
            vec![UniqueKey::new(FRIEND_PAIR_INDEX, self.pair_key().to_string())]
        } else {
            Vec::new()
        }
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

    fn request() -> FriendRequest {
        FriendRequest::new(UserId::new(), UserId::new()).unwrap()
    }

    #[test]
    fn new_request_is_pending() {
        assert_eq!(request().status(), FriendRequestStatus::Pending);
    }

    #[test]
    fn self_request_is_rejected() {
        let user = UserId::new();
        assert_eq!(
            FriendRequest::new(user, user),
            Err(FriendRequestError::SelfReference(user))
        );
    }

    #[test]
    fn self_request_from_draft_is_rejected_before_keying() {
        let user = UserId::new().to_string();
        let draft = FriendRequestDraft {
            requester_id: Some(user.clone()),
            recipient_id: Some(user),
        };
        assert!(FriendRequest::validate(&draft).is_empty());
        assert!(matches!(
            FriendRequest::from_draft(&draft),
            Err(FriendRequestError::SelfReference(_))
        ));
    }

    #[test]
    fn draft_requires_both_parties() {
        let errors = FriendRequest::validate(&FriendRequestDraft {
            requester_id: Some("bogus".to_string()),
            recipient_id: None,
        });
        assert!(errors.has("requesterId", ErrorCode::InvalidReference));
        assert!(errors.has("recipientId", ErrorCode::MissingField));
    }

    #[test]
    fn accept_and_reject_are_final() {
        let mut accepted = request();
        assert_eq!(accepted.accept(), Ok(FriendRequestStatus::Pending));
        assert!(accepted.transition(FriendRequestStatus::Pending).is_err());
        assert!(accepted.reject().is_err());

        let mut rejected = request();
        rejected.reject().unwrap();
        assert!(rejected.transition(FriendRequestStatus::Pending).is_err());
        assert!(rejected.accept().is_err());
    }

    #[test]
    fn pair_key_is_shared_by_reverse_requests() {
        let a = UserId::new();
        let b = UserId::new();
        let forward = FriendRequest::new(a, b).unwrap();
        let reverse = FriendRequest::new(b, a).unwrap();
        assert_eq!(forward.pair_key(), reverse.pair_key());
        assert_eq!(forward.unique_keys(), reverse.unique_keys());
    }

    #[test]
    fn rejected_request_releases_the_pair() {
        let mut req = request();
        assert_eq!(req.unique_keys().len(), 1);
        req.reject().unwrap();
        assert!(req.unique_keys().is_empty());
    }

    #[test]
    fn accepted_request_keeps_the_pair() {
        let mut req = request();
        req.accept().unwrap();
        assert_eq!(req.unique_keys()[0].index, FRIEND_PAIR_INDEX);
    }
}
