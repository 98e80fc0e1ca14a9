//! Chat message entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::validators::{enum_member, required_reference, required_text};
use crate::domain::foundation::{
    ChatSessionId, ClosedSet, MessageId, Record, Timestamp, UserId, ValidationErrors,
};

/// Kind of chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Written by a user.
    #[default]
    Text,
    /// Generated by the application (joins, reminders, ...).
    System,
}

impl ClosedSet for MessageType {
    const ALL: &'static [Self] = &[MessageType::Text, MessageType::System];

    fn label(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::System => "system",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw, unvalidated message input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDraft {
    pub session_id: Option<String>,
    pub sender_id: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A message posted to a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: MessageId,
    session_id: ChatSessionId,
    sender_id: UserId,
    content: String,
    #[serde(rename = "type")]
    kind: MessageType,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl ChatMessage {
    /// Returns every violation of the draft; empty means valid.
    pub fn validate(draft: &ChatMessageDraft) -> ValidationErrors {
        Self::from_draft(draft).err().unwrap_or_default()
    }

    /// Builds a message from raw input; content is stored trimmed and the
    /// type defaults to `text`.
    pub fn from_draft(draft: &ChatMessageDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let session_id = errors.check("sessionId", required_reference(draft.session_id.as_deref()));
        let sender_id = errors.check("senderId", required_reference(draft.sender_id.as_deref()));
        let content = errors.check("content", required_text(draft.content.as_deref()));
        let kind = match draft.kind.as_deref() {
            Some(label) => errors.check("type", enum_member::<MessageType>(label.trim())),
            None => Some(MessageType::default()),
        };

        match (session_id, sender_id, content, kind) {
            (Some(session_id), Some(sender_id), Some(content), Some(kind)) if errors.is_empty() => {
                Ok(Self {
                    id: MessageId::new(),
                    session_id,
                    sender_id,
                    content,
                    kind,
                    created_at: None,
                    updated_at: None,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn session_id(&self) -> ChatSessionId {
        self.session_id
    }

    pub fn sender_id(&self) -> UserId {
        self.sender_id
    }

    /// The author of the message; a read-only view of `sender_id`.
    pub fn user_id(&self) -> UserId {
        self.sender_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> MessageType {
        self.kind
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }
}

impl Record for ChatMessage {
    type Id = MessageId;
    const COLLECTION: &'static str = "chat_messages";

    fn id(&self) -> MessageId {
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
