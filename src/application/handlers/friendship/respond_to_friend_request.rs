//! RespondToFriendRequestHandler - Accepts or rejects a pending request.

use std::sync::Arc;

use crate::application::TransitionError;
use crate::domain::foundation::validators::enum_member;
use crate::domain::foundation::{FriendRequestId, FriendRequestStatus, Record, ValidationErrors};
use crate::domain::friendship::FriendRequest;
use crate::ports::RecordStore;

/// Command to answer a friend request.
#[derive(Debug, Clone)]
pub struct RespondToFriendRequestCommand {
    pub request_id: FriendRequestId,
    /// Raw requested status label, `accepted` or `rejected`.
    pub status: String,
}

/// Result of a successful response.
#[derive(Debug, Clone)]
pub struct RespondToFriendRequestResult {
    pub request: FriendRequest,
    pub previous: FriendRequestStatus,
}

/// Handler for friend request responses.
///
/// A rejection releases the user pair so a new request may be sent.
pub struct RespondToFriendRequestHandler {
    requests: Arc<dyn RecordStore<FriendRequest>>,
}

impl RespondToFriendRequestHandler {
    pub fn new(requests: Arc<dyn RecordStore<FriendRequest>>) -> Self {
        Self { requests }
    }

    pub async fn handle(
        &self,
        cmd: RespondToFriendRequestCommand,
    ) -> Result<RespondToFriendRequestResult, TransitionError> {
        let requested: FriendRequestStatus = enum_member(&cmd.status)
            .map_err(|violation| ValidationErrors::single("status", violation))?;

        let mut request = self
            .requests
            .find_by_id(cmd.request_id)
            .await?
            .ok_or(TransitionError::NotFound {
                collection: FriendRequest::COLLECTION,
                id: cmd.request_id.to_string(),
            })?;

        let previous = request.transition(requested).map_err(|err| {
            tracing::warn!(request_id = %cmd.request_id, error = %err, "illegal friend request transition");
            err
        })?;

        if previous == requested {
            tracing::debug!(request_id = %cmd.request_id, status = %previous, "friend request already in requested status");
            return Ok(RespondToFriendRequestResult { request, previous });
        }

        let saved = self.requests.update(request).await?;
        tracing::info!(
            request_id = %saved.id(),
            from = %previous,
            to = %saved.status(),
            "friend request answered"
        );
        Ok(RespondToFriendRequestResult {
            request: saved,
            previous,
        })
    }
}
