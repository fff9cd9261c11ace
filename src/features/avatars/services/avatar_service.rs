//! Avatar Upload Service - stores images and hands back a public URL

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Local;

use crate::core::error::Result;
use crate::core::handler::EventHandler;
use crate::features::avatars::dtos::{AvatarAction, AvatarUpload, UrlBody};
use crate::modules::storage::ObjectStore;
use crate::shared::types::{HttpEvent, HttpResponse, Operation};

pub struct AvatarUploadService {
    store: Arc<dyn ObjectStore>,
}

impl AvatarUploadService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Decode and store the image; returns its public URL
    pub async fn upload(&self, upload: AvatarUpload) -> Result<String> {
        let data = upload.decode()?;
        let key = upload.object_key(&Local::now());
        let content_type = upload.content_type();

        let size = data.len();
        self.store.put_object(&key, data, content_type).await?;

        tracing::info!(
            "Avatar uploaded: key={}, content_type={}, bytes={}",
            key,
            content_type,
            size
        );

        Ok(self.store.public_url(&key))
    }
}

#[async_trait]
impl EventHandler for AvatarUploadService {
    fn allowed_methods(&self) -> &'static str {
        "POST, OPTIONS"
    }

    async fn route(&self, operation: Operation, event: HttpEvent) -> Result<HttpResponse> {
        match AvatarAction::parse(operation, &event)? {
            AvatarAction::Upload(upload) => {
                let url = self.upload(upload).await?;
                HttpResponse::json(StatusCode::OK, &UrlBody { url })
            }
        }
    }
}
