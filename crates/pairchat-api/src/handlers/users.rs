//! User handlers
//!
//! Endpoints for the chat-partner roster and individual profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use pairchat_service::{UserResponse, UserService};

use crate::extractors::{AuthUser, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List every registered user except the caller
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_others(auth.user_id).await?;
    Ok(Json(users))
}

/// Get a user profile by id
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let user = service.get_profile(user_id).await?;
    Ok(Json(user))
}
