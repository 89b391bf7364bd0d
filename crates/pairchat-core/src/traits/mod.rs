//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AccountRepository, ChatRepository, MessageRepository, RepoResult, UserRepository,
};
