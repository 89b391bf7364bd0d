//! Database models with SQLx `FromRow` derives

mod account;
mod chat;
mod message;
mod user;

pub use account::AccountModel;
pub use chat::ChatModel;
pub use message::MessageModel;
pub use user::UserModel;
