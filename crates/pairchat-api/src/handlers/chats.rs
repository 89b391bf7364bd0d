//! Chat handlers
//!
//! Endpoints for opening chats and listing the caller's chats.

use axum::{extract::State, Json};
use pairchat_service::{
    ChatResponse, ChatService, ChatSummaryResponse, CreateChatRequest,
};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Open (create or reuse) a chat with another user
///
/// POST /chats
pub async fn create_chat(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let recipient_id = request
        .recipient_id
        .parse()
        .map_err(|_| ApiError::invalid_body("Invalid recipient_id format"))?;

    let service = ChatService::new(state.service_context());
    let chat = service.open_chat(auth.user_id, recipient_id).await?;
    Ok(Json(chat))
}

/// List the caller's chats
///
/// GET /chats
pub async fn list_chats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ChatResponse>>> {
    let service = ChatService::new(state.service_context());
    let chats = service.user_chats(auth.user_id).await?;
    Ok(Json(chats))
}

/// List the caller's chats with participant names and emails resolved
///
/// GET /chats/summaries
pub async fn list_chat_summaries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ChatSummaryResponse>>> {
    let service = ChatService::new(state.service_context());
    let chats = service.user_chats_with_names(auth.user_id).await?;
    Ok(Json(chats))
}
