//! # pairchat-core
//!
//! Domain layer containing entities, the Snowflake id value object, domain
//! errors, and repository traits. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Account, Chat, Message, User, UNVERIFIED_READ_GRANT};
pub use error::DomainError;
pub use traits::{
    AccountRepository, ChatRepository, MessageRepository, RepoResult, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
