//! Persistence for contact messages

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::messages::models::{ContactMessage, NewContactMessage};

#[async_trait]
pub trait ContactMessageStore: Send + Sync {
    async fn insert(&self, message: &NewContactMessage) -> Result<i32>;

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>>;

    async fn update_read_flag(&self, id: Option<&str>, is_read: Option<bool>) -> Result<u64>;

    async fn delete(&self, id: Option<&str>) -> Result<u64>;
}

pub struct PgContactMessageStore {
    pool: PgPool,
}

impl PgContactMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageStore for PgContactMessageStore {
    async fn insert(&self, message: &NewContactMessage) -> Result<i32> {
        let mut conn = self.pool.acquire().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>> {
        let mut conn = self.pool.acquire().await?;

        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, message, is_read, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(messages)
    }

    async fn update_read_flag(&self, id: Option<&str>, is_read: Option<bool>) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("UPDATE messages SET is_read = $1 WHERE id::text = $2")
            .bind(is_read)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Option<&str>) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM messages WHERE id::text = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
