//! Chat Service - public chat log between visitors and the site owner

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::core::error::Result;
use crate::core::handler::EventHandler;
use crate::features::chat::dtos::ChatAction;
use crate::features::chat::models::{ChatMessage, NewChatMessage};
use crate::features::chat::store::ChatStore;
use crate::shared::types::{CreatedBody, HttpEvent, HttpResponse, Operation};

pub struct ChatService {
    store: Arc<dyn ChatStore>,
}

impl ChatService {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, message: NewChatMessage) -> Result<i32> {
        let id = self.store.insert(&message).await?;

        tracing::info!("Chat message created: id={}, sender={}", id, message.sender);

        Ok(id)
    }

    /// Whole log, oldest first. Intentionally public, unlike the other lists.
    pub async fn list(&self) -> Result<Vec<ChatMessage>> {
        self.store.list_oldest_first().await
    }
}

#[async_trait]
impl EventHandler for ChatService {
    fn allowed_methods(&self) -> &'static str {
        "GET, POST, OPTIONS"
    }

    async fn route(&self, operation: Operation, event: HttpEvent) -> Result<HttpResponse> {
        match ChatAction::parse(operation, &event)? {
            ChatAction::Create(message) => {
                let id = self.create(message).await?;
                HttpResponse::json(StatusCode::CREATED, &CreatedBody::new(id, "Message sent"))
            }
            ChatAction::List => HttpResponse::json(StatusCode::OK, &self.list().await?),
        }
    }
}
