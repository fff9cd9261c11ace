mod friend_request_service;

pub use friend_request_service::FriendRequestService;
