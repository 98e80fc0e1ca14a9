//! Breathing domain module.
//!
//! - `pattern` - named breathing routines, unique by name
//! - `session` - a user's practice run of a pattern and its lifecycle

mod pattern;
mod session;

pub use pattern::{BreathingPattern, BreathingPatternDraft, PATTERN_NAME_INDEX};
pub use session::{
    BreathingSession, BreathingSessionDraft, MAX_SESSION_STRESS, MIN_SESSION_STRESS,
};
