use serde::Deserialize;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::friends::models::NewFriendRequest;
use crate::shared::types::{HttpEvent, Operation, RecordId};

const MISSING_FIELDS: &str = "Name and description are required";

/// Request DTO for the public friend request form
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateFriendRequestDto {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    pub avatar_url: Option<String>,
}

impl TryFrom<CreateFriendRequestDto> for NewFriendRequest {
    type Error = AppError;

    fn try_from(dto: CreateFriendRequestDto) -> Result<Self> {
        dto.validate()
            .map_err(|_| AppError::Validation(MISSING_FIELDS.to_string()))?;

        match (dto.name, dto.description) {
            (Some(name), Some(description)) => Ok(Self {
                name,
                description,
                avatar_url: dto.avatar_url,
            }),
            _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// Admin status change. Neither field is checked: an unknown id updates
/// nothing and a missing status is written through as-is.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFriendRequestStatusDto {
    pub id: Option<RecordId>,
    pub status: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FriendRequestAction {
    Create(NewFriendRequest),
    List,
    UpdateStatus {
        id: Option<String>,
        status: Option<String>,
    },
    /// Id straight from the query string, never parsed
    Delete { id: Option<String> },
}

impl FriendRequestAction {
    /// Parse the payload for an operation. Callers run the admin gate first so
    /// an unauthorized body is never decoded.
    pub fn parse(operation: Operation, event: &HttpEvent) -> Result<Self> {
        match operation {
            Operation::Create => {
                let dto: CreateFriendRequestDto = event.json_body()?;
                Ok(Self::Create(dto.try_into()?))
            }
            Operation::List => Ok(Self::List),
            Operation::Update => {
                let dto: UpdateFriendRequestStatusDto = event.json_body()?;
                Ok(Self::UpdateStatus {
                    id: dto.id.map(|id| id.as_store_key()),
                    status: dto.status,
                })
            }
            Operation::Delete => Ok(Self::Delete {
                id: event.query_param("id").map(str::to_string),
            }),
            Operation::Preflight => Err(AppError::MethodNotAllowed),
        }
    }
}
