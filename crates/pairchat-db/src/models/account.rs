//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the accounts table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
