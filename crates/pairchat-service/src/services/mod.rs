//! Business logic services

pub mod auth;
pub mod chat;
pub mod context;
pub mod error;
pub mod message;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use chat::ChatService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use user::UserService;
