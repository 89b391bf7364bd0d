//! Message service
//!
//! Listing, sending, and deleting messages.

use chrono::Utc;
use pairchat_core::entities::Message;
use pairchat_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{MessageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a chat's messages, newest first.
    ///
    /// An unknown chat id yields an empty list rather than an error.
    #[instrument(skip(self))]
    pub async fn chat_messages(&self, chat_id: Snowflake) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .find_by_chat(chat_id)
            .await
            .map_err(|e| {
                warn!(chat_id = %chat_id, error = %e, "Failed to load messages");
                ServiceError::MessageFetch
            })?;

        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Send a message into a chat.
    ///
    /// `sent_at` is stamped here, at call issuance, and is the ordering key
    /// for listings.
    #[instrument(skip(self, request))]
    pub async fn send(
        &self,
        chat_id: Snowflake,
        sender_id: Snowflake,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        if request.content.trim().is_empty() {
            return Err(ServiceError::Domain(DomainError::EmptyContent));
        }

        let chat = self
            .ctx
            .chat_repo()
            .find_by_id(chat_id)
            .await
            .map_err(|e| {
                warn!(chat_id = %chat_id, error = %e, "Failed to send message: chat lookup error");
                ServiceError::Send
            })?
            .ok_or_else(|| ServiceError::Domain(DomainError::ChatNotFound(chat_id)))?;

        if !chat.involves(sender_id) {
            return Err(ServiceError::Domain(DomainError::SenderNotParticipant));
        }

        let message = Message::new(
            self.ctx.generate_id(),
            chat_id,
            sender_id,
            request.content,
            Utc::now(),
        );

        self.ctx.message_repo().create(&message).await.map_err(|e| {
            warn!(chat_id = %chat_id, error = %e, "Failed to send message");
            ServiceError::Send
        })?;

        info!(message_id = %message.id, chat_id = %chat_id, "Message sent");

        Ok(MessageResponse::from(&message))
    }

    /// Delete a message by id.
    ///
    /// Deleting an id that does not exist fails; there is no authorization
    /// check tying the caller to the sender.
    #[instrument(skip(self))]
    pub async fn delete(&self, message_id: Snowflake) -> ServiceResult<()> {
        match self.ctx.message_repo().delete(message_id).await {
            Ok(()) => {
                info!(message_id = %message_id, "Message deleted");
                Ok(())
            }
            Err(e @ DomainError::MessageNotFound(_)) => Err(ServiceError::Domain(e)),
            Err(e) => {
                warn!(message_id = %message_id, error = %e, "Failed to delete message");
                Err(ServiceError::Delete)
            }
        }
    }
}
