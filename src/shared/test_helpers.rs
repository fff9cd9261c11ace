//! In-memory stand-ins for the Postgres stores and the object store.
//!
//! Each fake counts every call so tests can assert a rejected request never
//! reached storage.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::chat::models::{ChatMessage, NewChatMessage};
use crate::features::chat::store::ChatStore;
use crate::features::friends::models::{FriendRequest, NewFriendRequest};
use crate::features::friends::store::FriendRequestStore;
use crate::features::messages::models::{ContactMessage, NewContactMessage};
use crate::features::messages::store::ContactMessageStore;
use crate::modules::storage::ObjectStore;

/// Rows in insertion order plus a SERIAL-like id counter
struct Table<T> {
    rows: Mutex<Vec<T>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
}

impl<T: Clone> Table<T> {
    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn next_id(&self) -> i32 {
        (self.next_id.fetch_add(1, Ordering::SeqCst) + 1) as i32
    }

    fn rows(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    fn newest_first(&self) -> Vec<T> {
        let mut rows = self.rows();
        rows.reverse();
        rows
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }
}

fn matches_id(row_id: i32, id: Option<&str>) -> bool {
    id.is_some_and(|id| row_id.to_string() == id)
}

// =============================================================================
// CHAT
// =============================================================================

#[derive(Default)]
pub struct MemoryChatStore {
    table: Table<ChatMessage>,
}

impl MemoryChatStore {
    pub fn calls(&self) -> usize {
        self.table.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<ChatMessage> {
        self.table.rows()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn insert(&self, message: &NewChatMessage) -> Result<i32> {
        self.table.touch();
        let id = self.table.next_id();
        self.table.rows.lock().unwrap().push(ChatMessage {
            id,
            sender: message.sender.clone(),
            name: message.name.clone(),
            message: message.message.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_oldest_first(&self) -> Result<Vec<ChatMessage>> {
        self.table.touch();
        Ok(self.table.rows())
    }
}

// =============================================================================
// FRIEND REQUESTS
// =============================================================================

#[derive(Default)]
pub struct MemoryFriendRequestStore {
    table: Table<FriendRequest>,
}

impl MemoryFriendRequestStore {
    pub fn calls(&self) -> usize {
        self.table.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<FriendRequest> {
        self.table.rows()
    }
}

#[async_trait]
impl FriendRequestStore for MemoryFriendRequestStore {
    async fn insert(&self, request: &NewFriendRequest) -> Result<i32> {
        self.table.touch();
        let id = self.table.next_id();
        self.table.rows.lock().unwrap().push(FriendRequest {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            avatar_url: request.avatar_url.clone(),
            status: Some("pending".to_string()),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_newest_first(&self) -> Result<Vec<FriendRequest>> {
        self.table.touch();
        Ok(self.table.newest_first())
    }

    async fn update_status(&self, id: Option<&str>, status: Option<&str>) -> Result<u64> {
        self.table.touch();
        let mut affected = 0;
        for row in self.table.rows.lock().unwrap().iter_mut() {
            if matches_id(row.id, id) {
                row.status = status.map(str::to_string);
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete(&self, id: Option<&str>) -> Result<u64> {
        self.table.touch();
        let mut rows = self.table.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| !matches_id(row.id, id));
        Ok((before - rows.len()) as u64)
    }
}

// =============================================================================
// CONTACT MESSAGES
// =============================================================================

#[derive(Default)]
pub struct MemoryContactMessageStore {
    table: Table<ContactMessage>,
}

impl MemoryContactMessageStore {
    pub fn calls(&self) -> usize {
        self.table.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<ContactMessage> {
        self.table.rows()
    }
}

#[async_trait]
impl ContactMessageStore for MemoryContactMessageStore {
    async fn insert(&self, message: &NewContactMessage) -> Result<i32> {
        self.table.touch();
        let id = self.table.next_id();
        self.table.rows.lock().unwrap().push(ContactMessage {
            id,
            name: message.name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
            is_read: Some(false),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>> {
        self.table.touch();
        Ok(self.table.newest_first())
    }

    async fn update_read_flag(&self, id: Option<&str>, is_read: Option<bool>) -> Result<u64> {
        self.table.touch();
        let mut affected = 0;
        for row in self.table.rows.lock().unwrap().iter_mut() {
            if matches_id(row.id, id) {
                row.is_read = is_read;
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete(&self, id: Option<&str>) -> Result<u64> {
        self.table.touch();
        let mut rows = self.table.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| !matches_id(row.id, id));
        Ok((before - rows.len()) as u64)
    }
}

// =============================================================================
// OBJECT STORE
// =============================================================================

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub data: Vec<u8>,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<Vec<StoredObject>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MemoryObjectStore {
    /// A store that rejects every write
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Storage(format!("rejected write of '{}'", key)));
        }

        self.objects.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            data,
            content_type: content_type.to_string(),
        });
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/projects/test-key/bucket/{}", key)
    }
}
