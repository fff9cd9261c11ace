//! Chat routes

use std::sync::Arc;

use axum::{routing::any, Router};

use crate::core::handler::invoke;
use crate::features::chat::services::ChatService;

/// Create routes for the chat feature
///
/// Note: both reading and writing the chat log are public.
pub fn routes(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/chat", any(invoke::<ChatService>))
        .with_state(service)
}
