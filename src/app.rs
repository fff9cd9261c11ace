//! Router assembly shared by `main` and the router tests.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::middleware;
use crate::features::avatars::{routes as avatars_routes, AvatarUploadService};
use crate::features::chat::{routes as chat_routes, ChatService};
use crate::features::friends::{routes as friends_routes, FriendRequestService};
use crate::features::messages::{routes as messages_routes, ContactMessageService};

/// One instance of every resource handler
pub struct AppServices {
    pub chat: Arc<ChatService>,
    pub friends: Arc<FriendRequestService>,
    pub messages: Arc<ContactMessageService>,
    pub avatars: Arc<AvatarUploadService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the application router.
///
/// CORS is answered by each handler, so no CORS layer is installed here.
pub fn router(services: AppServices, max_body_size: usize) -> Router {
    Router::new()
        .merge(chat_routes::routes(services.chat))
        .merge(friends_routes::routes(services.friends))
        .merge(messages_routes::routes(services.messages))
        .merge(avatars_routes::routes(services.avatars))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or keep the client's)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
