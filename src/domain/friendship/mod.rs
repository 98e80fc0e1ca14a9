//! Friendship domain module.
//!
//! Friend requests and the canonical user-pair key that keeps at most one
//! active request between two users, whichever way it was sent.

mod pair_key;
mod request;

pub use pair_key::PairKey;
pub use request::{FriendRequest, FriendRequestDraft, FriendRequestError, FRIEND_PAIR_INDEX};
