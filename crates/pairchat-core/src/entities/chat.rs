//! Chat entity - a conversation between exactly two users

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Read-grant capability recorded when a chat is created. Opaque to this
/// layer; the storage boundary passes it through unchanged.
pub const UNVERIFIED_READ_GRANT: &str = "users/unverified";

/// Chat entity. The participant pair is unordered: at most one chat exists
/// for a given pair of users regardless of which side created it, and a user
/// cannot chat with themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: Snowflake,
    pub user1_id: Snowflake,
    pub user2_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Create a new Chat between two users
    pub fn new(id: Snowflake, user1_id: Snowflake, user2_id: Snowflake) -> Self {
        Self {
            id,
            user1_id,
            user2_id,
            created_at: Utc::now(),
        }
    }

    /// Check if a user participates in this chat
    #[inline]
    pub fn involves(&self, user_id: Snowflake) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// Check if this chat connects the given pair, in either order
    pub fn is_between(&self, a: Snowflake, b: Snowflake) -> bool {
        (self.user1_id == a && self.user2_id == b) || (self.user1_id == b && self.user2_id == a)
    }

    /// The other participant, or None if the user is not in this chat
    pub fn partner_of(&self, user_id: Snowflake) -> Option<Snowflake> {
        if self.user1_id == user_id {
            Some(self.user2_id)
        } else if self.user2_id == user_id {
            Some(self.user1_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat() -> Chat {
        Chat::new(Snowflake::new(10), Snowflake::new(1), Snowflake::new(2))
    }

    #[test]
    fn test_involves() {
        let c = chat();
        assert!(c.involves(Snowflake::new(1)));
        assert!(c.involves(Snowflake::new(2)));
        assert!(!c.involves(Snowflake::new(3)));
    }

    #[test]
    fn test_is_between_order_independent() {
        let c = chat();
        assert!(c.is_between(Snowflake::new(1), Snowflake::new(2)));
        assert!(c.is_between(Snowflake::new(2), Snowflake::new(1)));
        assert!(!c.is_between(Snowflake::new(1), Snowflake::new(3)));
    }

    #[test]
    fn test_partner_of() {
        let c = chat();
        assert_eq!(c.partner_of(Snowflake::new(1)), Some(Snowflake::new(2)));
        assert_eq!(c.partner_of(Snowflake::new(2)), Some(Snowflake::new(1)));
        assert_eq!(c.partner_of(Snowflake::new(3)), None);
    }
}
