//! Domain entities - core business objects

mod account;
mod chat;
mod message;
mod user;

pub use account::Account;
pub use chat::{Chat, UNVERIFIED_READ_GRANT};
pub use message::Message;
pub use user::User;
