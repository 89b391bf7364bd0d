//! Chat service
//!
//! Find-or-create chats between user pairs and list a user's chats, plainly
//! or enriched with participant names.

use std::collections::HashMap;

use pairchat_core::entities::{Chat, User, UNVERIFIED_READ_GRANT};
use pairchat_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{ChatResponse, ChatSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Open a chat between two users.
    ///
    /// Idempotent and order-independent: if a chat already connects the pair
    /// (in either orientation) it is returned; otherwise a new one is
    /// created carrying the read grant for unverified users.
    #[instrument(skip(self))]
    pub async fn open_chat(
        &self,
        user1_id: Snowflake,
        user2_id: Snowflake,
    ) -> ServiceResult<ChatResponse> {
        if user1_id == user2_id {
            return Err(ServiceError::Domain(DomainError::SelfChat));
        }

        // The other side must exist; a chat against a dangling id is rejected
        // up front
        let recipient = self
            .ctx
            .user_repo()
            .find_by_id(user2_id)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create chat: recipient lookup error");
                ServiceError::ChatCreate
            })?;
        if recipient.is_none() {
            return Err(ServiceError::Domain(DomainError::UserNotFound(user2_id)));
        }

        if let Some(existing) = self
            .ctx
            .chat_repo()
            .find_pair(user1_id, user2_id)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create chat: pair lookup error");
                ServiceError::ChatCreate
            })?
        {
            return Ok(ChatResponse::from(&existing));
        }

        let chat = Chat::new(self.ctx.generate_id(), user1_id, user2_id);
        self.ctx
            .chat_repo()
            .create(&chat, &[UNVERIFIED_READ_GRANT])
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create chat");
                ServiceError::ChatCreate
            })?;

        info!(chat_id = %chat.id, user1_id = %user1_id, user2_id = %user2_id, "Chat created");

        Ok(ChatResponse::from(&chat))
    }

    /// List the chats a user participates in
    #[instrument(skip(self))]
    pub async fn user_chats(&self, user_id: Snowflake) -> ServiceResult<Vec<ChatResponse>> {
        let chats = self.chats_for(user_id).await?;
        Ok(chats.iter().map(ChatResponse::from).collect())
    }

    /// List the chats a user participates in, with participant names and
    /// emails resolved.
    ///
    /// All participants are fetched with one batched query and joined back
    /// in chat order; a missing profile resolves to "Unknown" / "".
    #[instrument(skip(self))]
    pub async fn user_chats_with_names(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ChatSummaryResponse>> {
        let chats = self.chats_for(user_id).await?;

        let mut participant_ids: Vec<Snowflake> = Vec::with_capacity(chats.len() * 2);
        for chat in &chats {
            for id in [chat.user1_id, chat.user2_id] {
                if !participant_ids.contains(&id) {
                    participant_ids.push(id);
                }
            }
        }

        let users = self
            .ctx
            .user_repo()
            .find_by_ids(&participant_ids)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to load chats: participant lookup error");
                ServiceError::ChatFetch
            })?;

        let by_id: HashMap<Snowflake, &User> = users.iter().map(|u| (u.id, u)).collect();

        Ok(chats
            .iter()
            .map(|chat| ChatSummaryResponse::from_chat(chat, &by_id))
            .collect())
    }

    async fn chats_for(&self, user_id: Snowflake) -> ServiceResult<Vec<Chat>> {
        if user_id.is_zero() {
            return Err(ServiceError::validation(
                "Invalid user id provided for fetching chats",
            ));
        }

        self.ctx
            .chat_repo()
            .find_by_user(user_id)
            .await
            .map_err(|e| {
                warn!(user_id = %user_id, error = %e, "Failed to load chats");
                ServiceError::ChatFetch
            })
    }
}
