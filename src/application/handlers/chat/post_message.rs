//! PostMessageHandler - Command handler for posting chat messages.

use std::sync::Arc;

use crate::application::ConstraintError;
use crate::domain::chat::{ChatMessage, ChatMessageDraft};
use crate::ports::RecordStore;

/// Command to post a message to a chat session.
#[derive(Debug, Clone)]
pub struct PostMessageCommand {
    pub draft: ChatMessageDraft,
}

/// Handler for posting messages.
pub struct PostMessageHandler {
    messages: Arc<dyn RecordStore<ChatMessage>>,
}

impl PostMessageHandler {
    pub fn new(messages: Arc<dyn RecordStore<ChatMessage>>) -> Self {
        Self { messages }
    }

    pub async fn handle(&self, cmd: PostMessageCommand) -> Result<ChatMessage, ConstraintError> {
        let message = ChatMessage::from_draft(&cmd.draft)?;

        let saved = self.messages.insert(message).await?;
        tracing::debug!(
            message_id = %saved.id(),
            session_id = %saved.session_id(),
            kind = %saved.kind(),
            "chat message posted"
        );
        Ok(saved)
    }
}
