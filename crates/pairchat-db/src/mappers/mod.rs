//! Entity <-> model mappers

mod account;
mod chat;
mod message;
mod user;

pub use message::MessageInsert;
pub use user::UserInsert;
