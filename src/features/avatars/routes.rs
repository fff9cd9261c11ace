//! Avatar upload routes

use std::sync::Arc;

use axum::{routing::any, Router};

use crate::core::handler::invoke;
use crate::features::avatars::services::AvatarUploadService;

pub fn routes(service: Arc<AvatarUploadService>) -> Router {
    Router::new()
        .route("/upload-avatar", any(invoke::<AvatarUploadService>))
        .with_state(service)
}
