use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Database model for a friend request awaiting moderation
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FriendRequest {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: Option<String>,
    /// `pending` until an admin sets something else; any value is accepted
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new friend request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFriendRequest {
    pub name: String,
    pub description: String,
    pub avatar_url: Option<String>,
}
