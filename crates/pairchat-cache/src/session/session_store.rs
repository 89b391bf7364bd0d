//! Refresh-session storage in Redis.
//!
//! Each login/registration creates a session keyed by its refresh token, with
//! automatic expiration. Sessions are also tracked in a per-account set so
//! that every session of an account can be revoked at once.

use crate::pool::{RedisPool, RedisResult};
use pairchat_core::Snowflake;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

/// Key prefix for the per-account session set
const ACCOUNT_SESSIONS_PREFIX: &str = "account_sessions:";

/// Default session TTL (7 days), matching the refresh token lifetime
const DEFAULT_SESSION_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Account this session belongs to
    pub account_id: Snowflake,
    /// Session ID shared by the token pair
    pub session_id: String,
    /// Session creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl SessionData {
    /// Create new session data
    #[must_use]
    pub fn new(account_id: Snowflake, session_id: String) -> Self {
        Self {
            account_id,
            session_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Session store with an explicit store/validate/revoke lifecycle
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a new session store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    fn account_key(account_id: Snowflake) -> String {
        format!("{ACCOUNT_SESSIONS_PREFIX}{account_id}")
    }

    /// Store a session under its refresh token
    pub async fn store(&self, token: &str, data: &SessionData) -> RedisResult<()> {
        let key = Self::key(token);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        let account_key = Self::account_key(data.account_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&account_key, token).await?;
        conn.expire::<_, ()>(&account_key, self.ttl_seconds as i64)
            .await?;

        tracing::debug!(
            account_id = %data.account_id,
            session_id = %data.session_id,
            "Stored session"
        );

        Ok(())
    }

    /// Look up a session; returns None if expired or unknown
    pub async fn validate(&self, token: &str) -> RedisResult<Option<SessionData>> {
        self.pool.get_value(&Self::key(token)).await
    }

    /// Revoke (delete) a session; returns whether one existed
    pub async fn revoke(&self, token: &str) -> RedisResult<bool> {
        if let Some(data) = self.validate(token).await? {
            let account_key = Self::account_key(data.account_id);
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(&account_key, token).await?;
        }

        let revoked = self.pool.delete(&Self::key(token)).await?;
        if revoked {
            tracing::debug!("Revoked session");
        }

        Ok(revoked)
    }

    /// Revoke every session of an account (logout from all devices)
    pub async fn revoke_all_for_account(&self, account_id: Snowflake) -> RedisResult<u32> {
        let account_key = Self::account_key(account_id);
        let mut conn = self.pool.get().await?;

        let tokens: Vec<String> = conn.smembers(&account_key).await?;
        let mut revoked = 0u32;
        for token in &tokens {
            let deleted: i32 = conn.del(Self::key(token)).await?;
            revoked += deleted.max(0) as u32;
        }
        conn.del::<_, ()>(&account_key).await?;

        tracing::debug!(account_id = %account_id, revoked, "Revoked all sessions");

        Ok(revoked)
    }
}
