//! Method dispatch shared by every resource handler.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;

use crate::core::error::{AppError, Result};
use crate::shared::types::{HttpEvent, HttpResponse, Operation};

/// A resource endpoint that turns one `HttpEvent` into one `HttpResponse`.
///
/// Implementors provide `route` for the operations they support; `handle`
/// answers preflight, rejects unknown methods and renders contract errors
/// before anything reaches `route`.
#[async_trait]
pub trait EventHandler: Send + Sync + 'static {
    /// `Access-Control-Allow-Methods` advertised on preflight
    fn allowed_methods(&self) -> &'static str;

    /// Run a non-preflight operation. Unsupported operations return
    /// `AppError::MethodNotAllowed`.
    async fn route(&self, operation: Operation, event: HttpEvent) -> Result<HttpResponse>;

    async fn handle(&self, event: HttpEvent) -> Result<HttpResponse> {
        let operation = match Operation::from_method(&event.http_method) {
            Some(Operation::Preflight) => {
                return Ok(HttpResponse::preflight(self.allowed_methods()));
            }
            Some(operation) => operation,
            None => return AppError::MethodNotAllowed.into_client_response(),
        };

        match self.route(operation, event).await {
            Ok(response) => Ok(response),
            Err(err) => err.into_client_response(),
        }
    }
}

/// axum entry point binding a route to an `EventHandler`
pub async fn invoke<H: EventHandler>(
    State(handler): State<Arc<H>>,
    event: HttpEvent,
) -> Result<HttpResponse> {
    handler.handle(event).await
}
