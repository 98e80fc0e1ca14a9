//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod errors;
pub mod handlers;

pub use errors::{ConstraintError, TransitionError};
pub use handlers::{
    // Breathing handlers
    CreatePatternCommand, CreatePatternHandler,
    StartSessionCommand, StartSessionHandler,
    TransitionSessionCommand, TransitionSessionHandler, TransitionSessionResult,
    UpdateSessionProgressCommand, UpdateSessionProgressHandler,
    // Chat handlers
    PostMessageCommand, PostMessageHandler,
    // Friendship handlers
    RespondToFriendRequestCommand, RespondToFriendRequestHandler, RespondToFriendRequestResult,
    SendFriendRequestCommand, SendFriendRequestHandler,
    // Stress handlers
    LogStressCommand, LogStressHandler,
};
