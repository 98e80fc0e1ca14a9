//! Canonical key for an unordered pair of users.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::UserId;

/// Order-independent key of two distinct users.
///
/// `PairKey::new(a, b) == PairKey::new(b, a)`, so a request from `a` to `b`
/// and one from `b` to `a` index under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PairKey {
    low: UserId,
    high: UserId,
}

impl PairKey {
    /// Builds the key by sorting the two ids.
    pub fn new(a: UserId, b: UserId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> UserId {
        self.low
    }

    pub fn high(&self) -> UserId {
        self.high
    }

    /// Returns true if `user` is one side of the pair.
    pub fn involves(&self, user: UserId) -> bool {
        self.low == user || self.high == user
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.low, self.high)
    }
}
