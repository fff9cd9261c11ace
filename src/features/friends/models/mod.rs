mod friend_request;

pub use friend_request::{FriendRequest, NewFriendRequest};
