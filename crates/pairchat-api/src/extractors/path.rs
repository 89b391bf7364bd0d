//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use pairchat_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with chat_id
#[derive(Debug, serde::Deserialize)]
pub struct ChatIdPath {
    pub chat_id: String,
}

impl ChatIdPath {
    /// Parse chat_id as Snowflake
    pub fn chat_id(&self) -> Result<Snowflake, ApiError> {
        self.chat_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid chat_id format"))
    }
}

/// Path parameters with message_id
#[derive(Debug, serde::Deserialize)]
pub struct MessageIdPath {
    pub message_id: String,
}

impl MessageIdPath {
    /// Parse message_id as Snowflake
    pub fn message_id(&self) -> Result<Snowflake, ApiError> {
        self.message_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid message_id format"))
    }
}
