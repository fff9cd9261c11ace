use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Database model for a chat log entry
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: i32,
    /// Who wrote it, e.g. "user" or "admin"
    pub sender: String,
    pub name: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
    pub sender: String,
    pub name: Option<String>,
    pub message: String,
}
