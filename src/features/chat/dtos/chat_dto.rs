use serde::Deserialize;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::chat::models::NewChatMessage;
use crate::shared::types::{HttpEvent, Operation};

const MISSING_FIELDS: &str = "Sender and message are required";

/// Request DTO for posting to the chat
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateChatMessageDto {
    #[validate(required, length(min = 1))]
    pub sender: Option<String>,
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl TryFrom<CreateChatMessageDto> for NewChatMessage {
    type Error = AppError;

    fn try_from(dto: CreateChatMessageDto) -> Result<Self> {
        dto.validate()
            .map_err(|_| AppError::Validation(MISSING_FIELDS.to_string()))?;

        match (dto.sender, dto.message) {
            (Some(sender), Some(message)) => Ok(Self {
                sender,
                name: dto.name,
                message,
            }),
            _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// Everything the chat endpoint accepts
#[derive(Debug, PartialEq, Eq)]
pub enum ChatAction {
    Create(NewChatMessage),
    List,
}

impl ChatAction {
    pub fn parse(operation: Operation, event: &HttpEvent) -> Result<Self> {
        match operation {
            Operation::Create => {
                let dto: CreateChatMessageDto = event.json_body()?;
                Ok(Self::Create(dto.try_into()?))
            }
            Operation::List => Ok(Self::List),
            _ => Err(AppError::MethodNotAllowed),
        }
    }
}
