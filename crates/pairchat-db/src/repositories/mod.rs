//! PostgreSQL repository implementations

mod account;
mod chat;
mod error;
mod message;
mod user;

pub use account::PgAccountRepository;
pub use chat::PgChatRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
