//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize`. Snowflake IDs are serialized as
//! strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Session response with the token pair and the signed-in user
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl SessionResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User profile response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub account_id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Chat Responses
// ============================================================================

/// Basic chat response
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub id: String,
    pub user1_id: String,
    pub user2_id: String,
    pub created_at: DateTime<Utc>,
}

/// Chat response enriched with participant names and emails, resolved at
/// read time (these fields are never persisted)
#[derive(Debug, Clone, Serialize)]
pub struct ChatSummaryResponse {
    pub id: String,
    pub user1_id: String,
    pub user2_id: String,
    pub user1_name: String,
    pub user2_name: String,
    pub user1_email: String,
    pub user2_email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn new(database: bool, cache: bool) -> Self {
        Self {
            status: if database && cache { "ready" } else { "degraded" },
            database,
            cache,
        }
    }
}
