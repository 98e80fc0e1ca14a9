//! Chat handlers.

mod post_message;

pub use post_message::{PostMessageCommand, PostMessageHandler};
