//! S3-compatible storage client
//!
//! Uses the rust-s3 crate for lightweight S3 operations. A bucket handle is
//! built for every upload and dropped when the call returns.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use tracing::debug;

use super::ObjectStore;
use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};

pub struct S3ObjectStore {
    config: StorageConfig,
}

impl S3ObjectStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn bucket_name(&self) -> &str {
        &self.config.bucket
    }

    fn bucket(&self) -> Result<Box<Bucket>> {
        let credentials = Credentials::new(
            Some(&self.config.access_key),
            Some(&self.config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Storage(format!("Failed to create S3 credentials: {}", e)))?;

        let region = Region::Custom {
            region: self.config.region.clone(),
            endpoint: self.config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&self.config.bucket, region, credentials)
            .map_err(|e| AppError::Storage(format!("Failed to create S3 bucket: {}", e)))?;

        // http://endpoint/bucket/key rather than http://bucket.endpoint/key
        bucket.set_path_style();

        Ok(bucket)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        let bucket = self.bucket()?;

        let response = bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload file '{}': {}", key, e)))?;

        // Non-2xx responses are not errors without rust-s3's `fail-on-err`
        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(AppError::Storage(format!(
                "Failed to upload file '{}': status {}",
                key, status
            )));
        }

        debug!(
            "Uploaded file '{}' ({} bytes) to bucket '{}'",
            key,
            data.len(),
            self.config.bucket
        );
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/projects/{}/bucket/{}",
            self.config.cdn_base_url.trim_end_matches('/'),
            self.config.access_key,
            key
        )
    }
}
