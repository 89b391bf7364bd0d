//! # pairchat-cache
//!
//! Redis layer holding refresh sessions. Sessions are explicit objects with a
//! store/validate/revoke lifecycle rather than hidden process-wide state:
//! logout revokes exactly the sessions the store knows about.

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session types
pub use session::{SessionData, SessionStore};
