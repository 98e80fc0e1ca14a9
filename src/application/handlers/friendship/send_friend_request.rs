//! SendFriendRequestHandler - Command handler for sending friend requests.

use std::sync::Arc;

use crate::application::ConstraintError;
use crate::domain::friendship::{FriendRequest, FriendRequestDraft};
use crate::ports::RecordStore;

/// Command to send a friend request.
#[derive(Debug, Clone)]
pub struct SendFriendRequestCommand {
    pub draft: FriendRequestDraft,
}

/// Handler for sending friend requests.
///
/// At most one non-rejected request may exist per user pair, whichever
/// direction it was sent in; the store enforces this on insert.
pub struct SendFriendRequestHandler {
    requests: Arc<dyn RecordStore<FriendRequest>>,
}

impl SendFriendRequestHandler {
    pub fn new(requests: Arc<dyn RecordStore<FriendRequest>>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, cmd: SendFriendRequestCommand) -> Result<FriendRequest, ConstraintError> {
        let request = FriendRequest::from_draft(&cmd.draft)?;

        let saved = self.requests.insert(request).await.map_err(|err| {
            tracing::info!(error = %err, "friend request refused");
            ConstraintError::from(err)
        })?;
        tracing::info!(
            request_id = %saved.id(),
            requester_id = %saved.requester_id(),
            recipient_id = %saved.recipient_id(),
            "friend request sent"
        );
        Ok(saved)
    }
}
