//! Friendship handlers - sending and answering friend requests.

mod respond_to_friend_request;
mod send_friend_request;

pub use respond_to_friend_request::{
    RespondToFriendRequestCommand, RespondToFriendRequestHandler, RespondToFriendRequestResult,
};
pub use send_friend_request::{SendFriendRequestCommand, SendFriendRequestHandler};
