//! # pairchat-db
//!
//! Database layer implementing the repository traits with PostgreSQL via
//! SQLx: connection pool management, `FromRow` models, entity mappers, and
//! repository implementations.
//!
//! The consumed query surface is deliberately small: equality filters,
//! AND/OR combination, and descending sort — everything the domain's
//! operations need.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgAccountRepository, PgChatRepository, PgMessageRepository, PgUserRepository,
};
