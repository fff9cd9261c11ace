use serde::Deserialize;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::messages::models::NewContactMessage;
use crate::shared::types::{HttpEvent, Operation, RecordId};

const MISSING_FIELDS: &str = "Name and message are required";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateContactMessageDto {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl TryFrom<CreateContactMessageDto> for NewContactMessage {
    type Error = AppError;

    fn try_from(dto: CreateContactMessageDto) -> Result<Self> {
        dto.validate()
            .map_err(|_| AppError::Validation(MISSING_FIELDS.to_string()))?;

        match (dto.name, dto.message) {
            (Some(name), Some(message)) => Ok(Self {
                name,
                email: dto.email,
                message,
            }),
            _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateReadFlagDto {
    pub id: Option<RecordId>,
    pub is_read: Option<bool>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ContactMessageAction {
    Create(NewContactMessage),
    List,
    UpdateReadFlag {
        id: Option<String>,
        is_read: Option<bool>,
    },
    Delete {
        id: Option<String>,
    },
}

impl ContactMessageAction {
    pub fn parse(operation: Operation, event: &HttpEvent) -> Result<Self> {
        match operation {
            Operation::Create => {
                let dto: CreateContactMessageDto = event.json_body()?;
                Ok(Self::Create(dto.try_into()?))
            }
            Operation::List => Ok(Self::List),
            Operation::Update => {
                let dto: UpdateReadFlagDto = event.json_body()?;
                Ok(Self::UpdateReadFlag {
                    id: dto.id.map(|id| id.as_store_key()),
                    is_read: dto.is_read,
                })
            }
            Operation::Delete => Ok(Self::Delete {
                id: event.query_param("id").map(str::to_string),
            }),
            Operation::Preflight => Err(AppError::MethodNotAllowed),
        }
    }
}
