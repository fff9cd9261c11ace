//! Persistence for the chat log

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::chat::models::{ChatMessage, NewChatMessage};

#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Insert a message and return its generated id
    async fn insert(&self, message: &NewChatMessage) -> Result<i32>;

    async fn list_oldest_first(&self) -> Result<Vec<ChatMessage>>;
}

/// Postgres-backed chat log. Each call holds its own connection for the
/// duration of one statement.
pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatStore for PgChatStore {
    async fn insert(&self, message: &NewChatMessage) -> Result<i32> {
        let mut conn = self.pool.acquire().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO chat_messages (sender, name, message)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&message.sender)
        .bind(&message.name)
        .bind(&message.message)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    async fn list_oldest_first(&self) -> Result<Vec<ChatMessage>> {
        let mut conn = self.pool.acquire().await?;

        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT id, sender, name, message, created_at
            FROM chat_messages
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(messages)
    }
}
