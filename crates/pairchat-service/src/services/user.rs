//! User service
//!
//! Profile lookups and the chat-partner roster.

use pairchat_core::Snowflake;
use tracing::{instrument, warn};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every registered user except the caller, in insertion order.
    ///
    /// The roster is assumed small; there is no pagination.
    #[instrument(skip(self))]
    pub async fn list_others(&self, caller_id: Snowflake) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_all().await.map_err(|e| {
            warn!(error = %e, "Failed to list users");
            ServiceError::UserFetch
        })?;

        Ok(users
            .iter()
            .filter(|user| user.id != caller_id)
            .map(UserResponse::from)
            .collect())
    }

    /// Fetch a user profile by id
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(|e| {
                warn!(user_id = %user_id, error = %e, "Failed to fetch user profile");
                ServiceError::ProfileFetch
            })?
            .ok_or_else(|| {
                ServiceError::Domain(pairchat_core::DomainError::UserNotFound(user_id))
            })?;

        Ok(UserResponse::from(&user))
    }
}
