mod friend_request_dto;

pub use friend_request_dto::FriendRequestAction;
