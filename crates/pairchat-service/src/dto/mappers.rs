//! Entity -> response DTO mappers

use std::collections::HashMap;

use pairchat_core::entities::{Chat, Message, User};
use pairchat_core::Snowflake;

use super::responses::{ChatResponse, ChatSummaryResponse, MessageResponse, UserResponse};

/// Fallback participant name when the referenced profile is missing
const UNKNOWN_NAME: &str = "Unknown";

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            account_id: user.account_id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            image_url: user.image_url.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&Chat> for ChatResponse {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id.to_string(),
            user1_id: chat.user1_id.to_string(),
            user2_id: chat.user2_id.to_string(),
            created_at: chat.created_at,
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            chat_id: message.chat_id.to_string(),
            sender_id: message.sender_id.to_string(),
            content: message.content.clone(),
            sent_at: message.sent_at,
        }
    }
}

impl ChatSummaryResponse {
    /// Build a summary from a chat and the resolved participant profiles.
    /// A participant missing from the map resolves to "Unknown" / "".
    pub fn from_chat(chat: &Chat, users: &HashMap<Snowflake, &User>) -> Self {
        let (user1_name, user1_email) = name_and_email(users.get(&chat.user1_id).copied());
        let (user2_name, user2_email) = name_and_email(users.get(&chat.user2_id).copied());

        Self {
            id: chat.id.to_string(),
            user1_id: chat.user1_id.to_string(),
            user2_id: chat.user2_id.to_string(),
            user1_name,
            user2_name,
            user1_email,
            user2_email,
            created_at: chat.created_at,
        }
    }
}

fn name_and_email(user: Option<&User>) -> (String, String) {
    match user {
        Some(u) => (u.name.clone(), u.email.clone()),
        None => (UNKNOWN_NAME.to_string(), String::new()),
    }
}
