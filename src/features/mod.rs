pub mod auth;
pub mod avatars;
pub mod chat;
pub mod friends;
pub mod messages;
