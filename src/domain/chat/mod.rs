//! Chat domain module.
//!
//! Messages exchanged inside a chat session. Messages are immutable once
//! posted; the storage collaborator manages their timestamps.

mod message;

pub use message::{ChatMessage, ChatMessageDraft, MessageType};
