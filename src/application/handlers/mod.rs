//! Application handlers.
//!
//! Command handlers that orchestrate validation, state machines and storage.

pub mod breathing;
pub mod chat;
pub mod friendship;
pub mod stress;

pub use breathing::{
    CreatePatternCommand, CreatePatternHandler, StartSessionCommand, StartSessionHandler,
    TransitionSessionCommand, TransitionSessionHandler, TransitionSessionResult,
    UpdateSessionProgressCommand, UpdateSessionProgressHandler,
};
pub use chat::{PostMessageCommand, PostMessageHandler};
pub use friendship::{
    RespondToFriendRequestCommand, RespondToFriendRequestHandler, RespondToFriendRequestResult,
    SendFriendRequestCommand, SendFriendRequestHandler,
};
pub use stress::{LogStressCommand, LogStressHandler};
