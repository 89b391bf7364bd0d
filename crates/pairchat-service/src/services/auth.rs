//! Authentication service
//!
//! Handles registration, login, session refresh, logout, and the
//! current-user probe.

use pairchat_cache::SessionData;
use pairchat_common::auth::{hash_password, validate_password_strength, verify_password, TokenPair};
use pairchat_core::entities::{Account, User};
use pairchat_core::Snowflake;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{LoginRequest, RefreshRequest, RegisterRequest, SessionResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user: create the authentication account, then the
    /// linked profile.
    ///
    /// The two steps are not transactional. If the profile insert fails the
    /// account row remains behind.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<SessionResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.account_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(
                pairchat_core::DomainError::EmailAlreadyExists,
            ));
        }

        let password_hash = hash_password(&request.password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        // Step 1: authentication account
        let account = Account::new(self.ctx.generate_id(), request.email.clone());
        self.ctx
            .account_repo()
            .create(&account, &password_hash)
            .await?;

        // Step 2: linked profile
        let user = User::new(
            self.ctx.generate_id(),
            account.id,
            request.email,
            request.name,
        );
        if let Err(e) = self.ctx.user_repo().create(&user).await {
            error!(
                account_id = %account.id,
                error = %e,
                "Profile creation failed; account row is left behind"
            );
            return Err(ServiceError::Registration);
        }

        info!(account_id = %account.id, user_id = %user.id, "User registered");

        let pair = self.open_session(account.id).await.map_err(|e| {
            error!(account_id = %account.id, error = %e, "Session creation failed after registration");
            ServiceError::Registration
        })?;

        Ok(SessionResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            UserResponse::from(&user),
        ))
    }

    /// Sign in with email and password.
    ///
    /// Every underlying failure collapses into the same credential error so
    /// nothing about the cause leaks to the caller.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<SessionResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_email(&request.email)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login failed: account lookup error");
                ServiceError::InvalidCredentials
            })?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .account_repo()
            .password_hash(account.id)
            .await
            .map_err(|e| {
                warn!(account_id = %account.id, error = %e, "Login failed: hash lookup error");
                ServiceError::InvalidCredentials
            })?
            .ok_or_else(|| {
                warn!(account_id = %account.id, "Login failed: no password hash");
                ServiceError::InvalidCredentials
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|_| ServiceError::InvalidCredentials)?;
        if !is_valid {
            warn!(account_id = %account.id, "Login failed: wrong password");
            return Err(ServiceError::InvalidCredentials);
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_account(account.id)
            .await
            .map_err(|e| {
                warn!(account_id = %account.id, error = %e, "Login failed: profile lookup error");
                ServiceError::InvalidCredentials
            })?
            .ok_or_else(|| {
                warn!(account_id = %account.id, "Login failed: no profile for account");
                ServiceError::InvalidCredentials
            })?;

        let pair = self.open_session(account.id).await.map_err(|e| {
            warn!(account_id = %account.id, error = %e, "Login failed: session creation error");
            ServiceError::InvalidCredentials
        })?;

        info!(account_id = %account.id, "User logged in");

        Ok(SessionResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            UserResponse::from(&user),
        ))
    }

    /// Exchange a refresh token for a new session pair (rotation: the old
    /// session is revoked)
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshRequest) -> ServiceResult<SessionResponse> {
        let claims = self
            .ctx
            .jwt_keys()
            .validate_refresh(&request.refresh_token)
            .map_err(ServiceError::from)?;
        let account_id = claims.account_id().map_err(ServiceError::from)?;

        // The session must still be known to the store (not revoked)
        let session = self
            .ctx
            .session_store()
            .validate(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(pairchat_common::AppError::InvalidToken))?;

        if session.account_id != account_id {
            return Err(ServiceError::App(pairchat_common::AppError::InvalidToken));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_account(account_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(pairchat_core::DomainError::AccountNotFound(account_id))
            })?;

        self.ctx
            .session_store()
            .revoke(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let pair = self.open_session(account_id).await?;

        info!(account_id = %account_id, "Session refreshed");

        Ok(SessionResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            UserResponse::from(&user),
        ))
    }

    /// Terminate the current session. With a refresh token, revokes exactly
    /// that session; without one, revokes every session of the account.
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        account_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        let revoked = match refresh_token {
            Some(token) => self
                .ctx
                .session_store()
                .revoke(&token)
                .await
                .map_err(|e| {
                    warn!(account_id = %account_id, error = %e, "Logout failed: store error");
                    ServiceError::Logout
                })?,
            None => {
                let count = self
                    .ctx
                    .session_store()
                    .revoke_all_for_account(account_id)
                    .await
                    .map_err(|e| {
                        warn!(account_id = %account_id, error = %e, "Logout failed: store error");
                        ServiceError::Logout
                    })?;
                count > 0
            }
        };

        if !revoked {
            warn!(account_id = %account_id, "Logout failed: no active session");
            return Err(ServiceError::Logout);
        }

        info!(account_id = %account_id, "User logged out");
        Ok(())
    }

    /// Resolve the signed-in user from an access token, if any.
    ///
    /// This is the one operation that treats every failure — absent token,
    /// expired token, vanished profile, store error — as a benign `None`.
    #[instrument(skip(self, access_token))]
    pub async fn current_user(&self, access_token: Option<&str>) -> Option<UserResponse> {
        let token = access_token?;

        let claims = match self.ctx.jwt_keys().validate_access(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "No current user: token rejected");
                return None;
            }
        };

        let account_id = claims.account_id().ok()?;

        match self.ctx.user_repo().find_by_account(account_id).await {
            Ok(Some(user)) => Some(UserResponse::from(&user)),
            Ok(None) => {
                debug!(account_id = %account_id, "No current user: profile missing");
                None
            }
            Err(e) => {
                debug!(account_id = %account_id, error = %e, "No current user: lookup error");
                None
            }
        }
    }

    /// Issue a token pair and record the session in the store
    async fn open_session(&self, account_id: Snowflake) -> ServiceResult<TokenPair> {
        let session_id = Uuid::new_v4().to_string();
        let pair = self
            .ctx
            .jwt_keys()
            .issue_pair(account_id, &session_id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let data = SessionData::new(account_id, session_id);
        self.ctx
            .session_store()
            .store(&pair.refresh_token, &data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(pair)
    }
}
