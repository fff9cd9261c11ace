mod avatar_dto;

pub use avatar_dto::{AvatarAction, AvatarUpload, UrlBody};
