//! Message entity - a text message inside a chat

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Message entity. Messages are immutable once sent: they can be deleted by
/// id but never edited. `sent_at` is assigned at send time and is the
/// ordering key when listing a chat's messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub chat_id: Snowflake,
    pub sender_id: Snowflake,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message stamped with the given send time
    pub fn new(
        id: Snowflake,
        chat_id: Snowflake,
        sender_id: Snowflake,
        content: String,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            chat_id,
            sender_id,
            content,
            sent_at,
        }
    }

    /// Check if the message content is blank
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Get a truncated preview of the message content
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str) -> Message {
        Message::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            content.to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_is_empty() {
        assert!(message("").is_empty());
        assert!(message("   ").is_empty());
        assert!(!message("hi").is_empty());
    }

    #[test]
    fn test_preview() {
        let msg = message("Hello, world!");
        assert_eq!(msg.preview(5), "Hello");
        assert_eq!(msg.preview(100), "Hello, world!");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let msg = message("héllo");
        // 'é' is two bytes; a cut in the middle falls back to the boundary
        assert_eq!(msg.preview(2), "h");
    }
}
