//! Friend request routes

use std::sync::Arc;

use axum::{routing::any, Router};

use crate::core::handler::invoke;
use crate::features::friends::services::FriendRequestService;

/// Create routes for the friend requests feature
///
/// Submission is public; list, status update and delete check the admin
/// secret inside the service.
pub fn routes(service: Arc<FriendRequestService>) -> Router {
    Router::new()
        .route("/friends", any(invoke::<FriendRequestService>))
        .with_state(service)
}
