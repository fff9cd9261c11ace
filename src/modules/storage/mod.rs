//! Storage module for uploaded files
//!
//! [`ObjectStore`] is the write-only capability the upload endpoint needs;
//! [`S3ObjectStore`] implements it against any S3-compatible service.

mod s3_client;

use async_trait::async_trait;

use crate::core::error::Result;

pub use s3_client::S3ObjectStore;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key` with the given content type
    async fn put_object(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()>;

    /// Publicly retrievable URL for an object key
    fn public_url(&self, key: &str) -> String;
}
