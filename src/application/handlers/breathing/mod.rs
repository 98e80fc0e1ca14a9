//! Breathing handlers - patterns and practice sessions.

mod create_pattern;
mod start_session;
mod transition_session;
mod update_session_progress;

pub use create_pattern::{CreatePatternCommand, CreatePatternHandler};
pub use start_session::{StartSessionCommand, StartSessionHandler};
pub use transition_session::{
    TransitionSessionCommand, TransitionSessionHandler, TransitionSessionResult,
};
pub use update_session_progress::{UpdateSessionProgressCommand, UpdateSessionProgressHandler};
