//! Message handlers
//!
//! Endpoints for listing, sending, and deleting messages.

use axum::{
    extract::{Path, State},
    Json,
};
use pairchat_service::{MessageResponse, MessageService, SendMessageRequest};

use crate::extractors::{AuthUser, ChatIdPath, MessageIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a chat's messages, newest first
///
/// GET /chats/{chat_id}/messages
pub async fn get_messages(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<ChatIdPath>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let chat_id = path.chat_id()?;

    let service = MessageService::new(state.service_context());
    let messages = service.chat_messages(chat_id).await?;
    Ok(Json(messages))
}

/// Send a message into a chat; the caller is the sender
///
/// POST /chats/{chat_id}/messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ChatIdPath>,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let chat_id = path.chat_id()?;

    let service = MessageService::new(state.service_context());
    let message = service.send(chat_id, auth.user_id, request).await?;
    Ok(Created(Json(message)))
}

/// Delete a message by id
///
/// DELETE /messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<MessageIdPath>,
) -> ApiResult<NoContent> {
    let message_id = path.message_id()?;

    let service = MessageService::new(state.service_context());
    service.delete(message_id).await?;
    Ok(NoContent)
}
