//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, HttpConfig,
    RateLimitConfig, RedisConfig, SnowflakeConfig,
};
