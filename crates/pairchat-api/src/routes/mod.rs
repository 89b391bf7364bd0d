//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1. Routes that
//! take the `AuthUser` extractor require a valid session on every request;
//! the rest are public.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, chats, health, messages, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(chat_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
}

/// Chat and message routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chats", post(chats::create_chat))
        .route("/chats", get(chats::list_chats))
        .route("/chats/summaries", get(chats::list_chat_summaries))
        .route("/chats/:chat_id/messages", get(messages::get_messages))
        .route("/chats/:chat_id/messages", post(messages::create_message))
        .route("/messages/:message_id", delete(messages::delete_message))
}
