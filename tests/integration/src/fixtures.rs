//! Test fixtures and data generators
//!
//! Reusable request/response shapes for the end-to-end tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
            name: format!("Test User {suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Session response
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub account_id: String,
    pub email: String,
    pub name: String,
    pub image_url: Option<String>,
}

/// Create chat request
#[derive(Debug, Serialize)]
pub struct CreateChatRequest {
    pub recipient_id: String,
}

/// Chat response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub user1_id: String,
    pub user2_id: String,
}

/// Chat summary response (with participant names)
#[derive(Debug, Deserialize)]
pub struct ChatSummaryResponse {
    pub id: String,
    pub user1_name: String,
    pub user2_name: String,
    pub user1_email: String,
    pub user2_email: String,
}

/// Send message request
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub content: String,
    pub sent_at: String,
}
