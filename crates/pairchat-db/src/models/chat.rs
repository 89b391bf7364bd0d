//! Chat database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the chats table
///
/// `read_grants` holds the opaque capability strings recorded at creation;
/// the repository passes them through without interpreting them.
#[derive(Debug, Clone, FromRow)]
pub struct ChatModel {
    pub id: i64,
    pub user1_id: i64,
    pub user2_id: i64,
    pub read_grants: Vec<String>,
    pub created_at: DateTime<Utc>,
}
