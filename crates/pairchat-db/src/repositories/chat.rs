//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pairchat_core::entities::Chat;
use pairchat_core::traits::{ChatRepository, RepoResult};
use pairchat_core::value_objects::Snowflake;

use crate::models::ChatModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Chat>> {
        let result = sqlx::query_as::<_, ChatModel>(
            r"
            SELECT id, user1_id, user2_id, read_grants, created_at
            FROM chats
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Chat::from))
    }

    #[instrument(skip(self))]
    async fn find_pair(
        &self,
        user1_id: Snowflake,
        user2_id: Snowflake,
    ) -> RepoResult<Option<Chat>> {
        // The pair is unordered: match it in either orientation
        let result = sqlx::query_as::<_, ChatModel>(
            r"
            SELECT id, user1_id, user2_id, read_grants, created_at
            FROM chats
            WHERE (user1_id = $1 AND user2_id = $2)
               OR (user1_id = $2 AND user2_id = $1)
            ",
        )
        .bind(user1_id.into_inner())
        .bind(user2_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Chat::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Chat>> {
        let results = sqlx::query_as::<_, ChatModel>(
            r"
            SELECT id, user1_id, user2_id, read_grants, created_at
            FROM chats
            WHERE user1_id = $1 OR user2_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Chat::from).collect())
    }

    #[instrument(skip(self, chat, read_grants), fields(chat_id = %chat.id))]
    async fn create(&self, chat: &Chat, read_grants: &[&str]) -> RepoResult<()> {
        let grants: Vec<String> = read_grants.iter().map(|s| (*s).to_string()).collect();

        sqlx::query(
            r"
            INSERT INTO chats (id, user1_id, user2_id, read_grants, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(chat.id.into_inner())
        .bind(chat.user1_id.into_inner())
        .bind(chat.user2_id.into_inner())
        .bind(&grants)
        .bind(chat.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
