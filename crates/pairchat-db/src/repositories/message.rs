//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pairchat_core::entities::Message;
use pairchat_core::traits::{MessageRepository, RepoResult};
use pairchat_core::value_objects::Snowflake;

use crate::mappers::MessageInsert;
use crate::models::MessageModel;

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, chat_id, sender_id, content, sent_at
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn find_by_chat(&self, chat_id: Snowflake) -> RepoResult<Vec<Message>> {
        // Newest first; ids are time-ordered, so equal timestamps fall back
        // to creation order
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, chat_id, sender_id, content, sent_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY sent_at DESC, id DESC
            ",
        )
        .bind(chat_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        let insert = MessageInsert::new(message);

        sqlx::query(
            r"
            INSERT INTO messages (id, chat_id, sender_id, content, sent_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(insert.id)
        .bind(insert.chat_id)
        .bind(insert.sender_id)
        .bind(insert.content)
        .bind(message.sent_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Messages are never edited or soft-deleted; removal is final
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }
}
