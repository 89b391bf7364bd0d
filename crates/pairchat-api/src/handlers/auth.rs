//! Authentication handlers
//!
//! Endpoints for registration, login, session refresh, logout, and the
//! current-user probe.

use axum::{extract::State, Json};
use pairchat_service::{
    AuthService, LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest, SessionResponse,
    UserResponse,
};

use crate::extractors::{AuthUser, BearerToken, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<SessionResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new session
///
/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Logout the current session
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<LogoutRequest>>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    let refresh_token = body.and_then(|b| b.0.refresh_token);
    service.logout(auth.account_id, refresh_token).await?;
    Ok(NoContent)
}

/// Resolve the signed-in user, answering JSON `null` when there is no valid
/// session
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Json<Option<UserResponse>> {
    let service = AuthService::new(state.service_context());
    Json(service.current_user(token.as_deref()).await)
}
