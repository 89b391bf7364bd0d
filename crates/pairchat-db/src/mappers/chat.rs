//! Chat entity <-> model mapper

use pairchat_core::entities::Chat;
use pairchat_core::value_objects::Snowflake;

use crate::models::ChatModel;

/// Convert ChatModel to Chat entity
///
/// Read grants are a storage concern and do not travel on the entity.
impl From<ChatModel> for Chat {
    fn from(model: ChatModel) -> Self {
        Chat {
            id: Snowflake::new(model.id),
            user1_id: Snowflake::new(model.user1_id),
            user2_id: Snowflake::new(model.user2_id),
            created_at: model.created_at,
        }
    }
}
