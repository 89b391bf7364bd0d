//! Authentication extractor - the guard in front of protected routes
//!
//! Every request to a guarded route re-validates the bearer token and
//! re-resolves the caller's profile; nothing is cached between requests. A
//! missing or rejected token short-circuits the handler with 401, the API
//! equivalent of redirecting to sign-in.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pairchat_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Account ID from the token subject
    pub account_id: Snowflake,
    /// The caller's profile id
    pub user_id: Snowflake,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_keys()
            .validate_access(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuth
            })?;

        let account_id = claims.account_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid account id in token");
            ApiError::InvalidAuth
        })?;

        // A valid token whose profile has vanished is treated as signed out
        let user = app_state
            .service_context()
            .user_repo()
            .find_by_account(account_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Profile lookup failed during auth");
                ApiError::InvalidAuth
            })?
            .ok_or(ApiError::InvalidAuth)?;

        Ok(AuthUser {
            account_id,
            user_id: user.id,
        })
    }
}

/// The raw bearer token, if the request carries one.
///
/// Used by the current-user probe, which must answer `null` on any
/// authentication problem instead of rejecting the request.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        Ok(BearerToken(token))
    }
}
