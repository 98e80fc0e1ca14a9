//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, statuses, validation errors)
//! - `scale` - Ordinal category scales (mood, stress level)
//! - `breathing` - Breathing patterns and practice sessions
//! - `chat` - Chat messages
//! - `friendship` - Friend requests and the user-pair key
//! - `stress` - Stress log entries

pub mod breathing;
pub mod chat;
pub mod foundation;
pub mod friendship;
pub mod scale;
pub mod stress;
