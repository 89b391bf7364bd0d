//! Account entity - an authentication identity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Authentication identity. Carries the credentials used to sign in; the
/// visible profile lives on the linked [`super::User`]. The password hash is
/// handled by the storage layer and never appears on the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Snowflake,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new Account
    pub fn new(id: Snowflake, email: String) -> Self {
        Self {
            id,
            email,
            created_at: Utc::now(),
        }
    }
}
