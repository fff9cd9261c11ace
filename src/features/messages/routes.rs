//! Contact message routes

use std::sync::Arc;

use axum::{routing::any, Router};

use crate::core::handler::invoke;
use crate::features::messages::services::ContactMessageService;

/// Create routes for the contact messages feature
pub fn routes(service: Arc<ContactMessageService>) -> Router {
    Router::new()
        .route("/messages", any(invoke::<ContactMessageService>))
        .with_state(service)
}
