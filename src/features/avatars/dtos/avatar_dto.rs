use base64::prelude::*;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{
    AVATAR_KEY_PREFIX, AVATAR_TIMESTAMP_FORMAT, DEFAULT_AVATAR_FILE_NAME,
};
use crate::shared::types::{HttpEvent, Operation};

const MISSING_FILE: &str = "File data is required";

/// Request DTO for an avatar upload
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UploadAvatarDto {
    /// Data URL (`data:image/png;base64,...`) or bare base64
    #[validate(required, length(min = 1))]
    pub file: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

/// Response DTO carrying the public location of the stored object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlBody {
    pub url: String,
}

/// A validated upload, still encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file: String,
    pub file_name: String,
}

impl TryFrom<UploadAvatarDto> for AvatarUpload {
    type Error = AppError;

    fn try_from(dto: UploadAvatarDto) -> Result<Self> {
        dto.validate()
            .map_err(|_| AppError::Validation(MISSING_FILE.to_string()))?;

        let file = dto
            .file
            .ok_or_else(|| AppError::Validation(MISSING_FILE.to_string()))?;
        let file_name = dto
            .file_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR_FILE_NAME.to_string());

        Ok(Self { file, file_name })
    }
}

impl AvatarUpload {
    /// Decode the payload, dropping any `data:...;base64,` prefix first
    pub fn decode(&self) -> Result<Vec<u8>> {
        let encoded = self.file.split(',').nth(1).unwrap_or(&self.file);

        // Line-wrapped payloads are accepted
        let encoded: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        Ok(BASE64_STANDARD.decode(encoded)?)
    }

    pub fn content_type(&self) -> &'static str {
        let name = self.file_name.to_lowercase();
        if name.ends_with(".png") {
            "image/png"
        } else if name.ends_with(".gif") {
            "image/gif"
        } else {
            "image/jpeg"
        }
    }

    /// `avatars/<YYYYMMDD_HHMMSS>_<fileName>` for the given instant
    pub fn object_key<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "{}/{}_{}",
            AVATAR_KEY_PREFIX,
            now.format(AVATAR_TIMESTAMP_FORMAT),
            self.file_name
        )
    }
}

/// Everything the upload endpoint accepts
#[derive(Debug, PartialEq, Eq)]
pub enum AvatarAction {
    Upload(AvatarUpload),
}

impl AvatarAction {
    pub fn parse(operation: Operation, event: &HttpEvent) -> Result<Self> {
        match operation {
            Operation::Create => {
                let dto: UploadAvatarDto = event.json_body()?;
                Ok(Self::Upload(dto.try_into()?))
            }
            _ => Err(AppError::MethodNotAllowed),
        }
    }
}
