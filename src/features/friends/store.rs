//! Persistence for friend requests

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::friends::models::{FriendRequest, NewFriendRequest};

#[async_trait]
pub trait FriendRequestStore: Send + Sync {
    async fn insert(&self, request: &NewFriendRequest) -> Result<i32>;

    async fn list_newest_first(&self) -> Result<Vec<FriendRequest>>;

    /// Returns the number of rows touched; zero is not an error
    async fn update_status(&self, id: Option<&str>, status: Option<&str>) -> Result<u64>;

    /// Returns the number of rows removed; zero is not an error
    async fn delete(&self, id: Option<&str>) -> Result<u64>;
}

pub struct PgFriendRequestStore {
    pool: PgPool,
}

impl PgFriendRequestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Ids are compared as text so whatever the client sent reaches the store
// unparsed; a value that is not a row id matches nothing.
#[async_trait]
impl FriendRequestStore for PgFriendRequestStore {
    async fn insert(&self, request: &NewFriendRequest) -> Result<i32> {
        let mut conn = self.pool.acquire().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO friend_requests (name, description, avatar_url)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.avatar_url)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    async fn list_newest_first(&self) -> Result<Vec<FriendRequest>> {
        let mut conn = self.pool.acquire().await?;

        let requests = sqlx::query_as::<_, FriendRequest>(
            r#"
            SELECT id, name, description, avatar_url, status, created_at
            FROM friend_requests
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(requests)
    }

    async fn update_status(&self, id: Option<&str>, status: Option<&str>) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("UPDATE friend_requests SET status = $1 WHERE id::text = $2")
            .bind(status)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Option<&str>) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM friend_requests WHERE id::text = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
