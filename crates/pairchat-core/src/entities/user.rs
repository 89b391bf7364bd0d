//! User entity - a chat user profile

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User profile linked to an [`super::Account`] by `account_id`.
///
/// Created once at registration and immutable afterwards (profile editing is
/// not part of this system).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub account_id: Snowflake,
    pub email: String,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, account_id: Snowflake, email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            account_id,
            email,
            name,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the profile carries an avatar image
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            Snowflake::new(2),
            Snowflake::new(1),
            "alice@example.com".to_string(),
            "Alice".to_string(),
        );
        assert_eq!(user.account_id, Snowflake::new(1));
        assert_eq!(user.name, "Alice");
        assert!(!user.has_image());
    }

    #[test]
    fn test_has_image() {
        let mut user = User::new(
            Snowflake::new(2),
            Snowflake::new(1),
            "a@x.com".to_string(),
            "A".to_string(),
        );
        user.image_url = Some("https://example.com/a.png".to_string());
        assert!(user.has_image());
    }
}
