//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, lifecycle status enums, field
//! validators and error types that form the vocabulary of the domain.

mod errors;
mod friend_request_status;
mod ids;
mod record;
mod session_status;
mod state_machine;
mod timestamp;
pub mod validators;

pub use errors::{element_path, DomainError, ErrorCode, ValidationErrors, Violation};
pub use friend_request_status::FriendRequestStatus;
pub use ids::{
    BreathingSessionId, ChatSessionId, FriendRequestId, MessageId, PatternId, StressLogId, UserId,
};
pub use record::{Record, UniqueKey};
pub use session_status::SessionStatus;
pub use state_machine::{IllegalTransition, StateMachine};
pub use timestamp::Timestamp;
pub use validators::ClosedSet;
