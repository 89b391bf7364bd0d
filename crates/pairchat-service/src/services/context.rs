//! Service context - dependency container for services
//!
//! Holds the repositories, session store, token keys, and id generator that
//! services operate on. Session state lives here explicitly (behind the
//! store) rather than in process-wide singletons.

use std::sync::Arc;

use pairchat_cache::{RedisPool, SessionStore};
use pairchat_common::auth::JwtKeys;
use pairchat_db::PgPool;
use pairchat_core::traits::{
    AccountRepository, ChatRepository, MessageRepository, UserRepository,
};
use pairchat_core::SnowflakeGenerator;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    redis_pool: RedisPool,

    account_repo: Arc<dyn AccountRepository>,
    user_repo: Arc<dyn UserRepository>,
    chat_repo: Arc<dyn ChatRepository>,
    message_repo: Arc<dyn MessageRepository>,

    session_store: SessionStore,
    jwt_keys: Arc<JwtKeys>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the chat repository
    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the session store
    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    /// Get the JWT keys
    pub fn jwt_keys(&self) -> &JwtKeys {
        self.jwt_keys.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> pairchat_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_store", &"SessionStore")
            .finish()
    }
}

/// Builder for creating a ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    account_repo: Option<Arc<dyn AccountRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    chat_repo: Option<Arc<dyn ChatRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    session_store: Option<SessionStore>,
    jwt_keys: Option<Arc<JwtKeys>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, pool: RedisPool) -> Self {
        self.redis_pool = Some(pool);
        self
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn chat_repo(mut self, repo: Arc<dyn ChatRepository>) -> Self {
        self.chat_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: SessionStore) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn jwt_keys(mut self, keys: Arc<JwtKeys>) -> Self {
        self.jwt_keys = Some(keys);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            redis_pool: self
                .redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            account_repo: self
                .account_repo
                .ok_or_else(|| ServiceError::validation("account_repo is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            chat_repo: self
                .chat_repo
                .ok_or_else(|| ServiceError::validation("chat_repo is required"))?,
            message_repo: self
                .message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            session_store: self
                .session_store
                .ok_or_else(|| ServiceError::validation("session_store is required"))?,
            jwt_keys: self
                .jwt_keys
                .ok_or_else(|| ServiceError::validation("jwt_keys is required"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        })
    }
}
