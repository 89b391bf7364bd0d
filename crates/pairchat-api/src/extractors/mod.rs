//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path parameters.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, BearerToken};
pub use path::{ChatIdPath, MessageIdPath, UserIdPath};
pub use validated::ValidatedJson;
