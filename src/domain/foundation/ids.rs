//! Strongly-typed identifier value objects.
//!
//! Every record reference in the domain is a UUID wrapped in its own newtype,
//! so a `UserId` can never be passed where a `ChatSessionId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a UUID-backed identifier newtype with the shared constructor set.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", stringify!($name), ".")]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", stringify!($name), " from an existing UUID.")]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

entity_id!(
    /// Identifier of an application user.
    UserId
);

entity_id!(
    /// Unique identifier for a breathing pattern definition.
    PatternId
);

entity_id!(
    /// Unique identifier for a single breathing practice session.
    BreathingSessionId
);

entity_id!(
    /// Identifier of the chat session a message belongs to.
    ChatSessionId
);

entity_id!(
    /// Unique identifier for a chat message.
    MessageId
);

entity_id!(
    /// Unique identifier for a friend request.
    FriendRequestId
);

entity_id!(
    /// Unique identifier for a stress log entry.
    StressLogId
);
