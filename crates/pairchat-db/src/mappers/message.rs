//! Message entity <-> model mapper

use pairchat_core::entities::Message;
use pairchat_core::value_objects::Snowflake;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            chat_id: Snowflake::new(model.chat_id),
            sender_id: Snowflake::new(model.sender_id),
            content: model.content,
            sent_at: model.sent_at,
        }
    }
}

/// Borrowed view of a Message entity for database insertion
pub struct MessageInsert<'a> {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: &'a str,
}

impl<'a> MessageInsert<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            id: message.id.into_inner(),
            chat_id: message.chat_id.into_inner(),
            sender_id: message.sender_id.into_inner(),
            content: &message.content,
        }
    }
}
