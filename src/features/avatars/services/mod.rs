mod avatar_service;

pub use avatar_service::AvatarUploadService;
