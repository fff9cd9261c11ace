use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Database model for a contact-form message
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub message: String,
    pub is_read: Option<bool>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Option<String>,
    pub message: String,
}
