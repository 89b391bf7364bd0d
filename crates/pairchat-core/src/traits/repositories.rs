//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation.

use async_trait::async_trait;

use crate::entities::{Account, Chat, Message, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new account with its password hash
    async fn create(&self, account: &Account, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user profile by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user profile by owning account
    async fn find_by_account(&self, account_id: Snowflake) -> RepoResult<Option<User>>;

    /// Fetch profiles for a set of ids; missing ids are simply absent from
    /// the result, in no guaranteed order
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// List every profile in insertion order
    async fn list_all(&self) -> RepoResult<Vec<User>>;

    /// Create a new user profile
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Chat Repository
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Find chat by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Chat>>;

    /// Find the chat connecting two users, matching the pair in either order
    async fn find_pair(&self, user1_id: Snowflake, user2_id: Snowflake)
        -> RepoResult<Option<Chat>>;

    /// List chats where the user is either participant
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Chat>>;

    /// Create a new chat carrying the given read-grant capability strings
    async fn create(&self, chat: &Chat, read_grants: &[&str]) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// List a chat's messages, newest first (`sent_at` descending, ties by
    /// creation order). An unknown chat id yields an empty list.
    async fn find_by_chat(&self, chat_id: Snowflake) -> RepoResult<Vec<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Delete a message by id; fails with `MessageNotFound` if absent
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
