//! # pairchat-service
//!
//! Application layer: business logic and use cases. Services compose the
//! repository ports with the session store and token keys held by
//! [`ServiceContext`], and translate every failure into the operation-tagged
//! [`ServiceError`] taxonomy before it reaches the HTTP layer.

pub mod dto;
pub mod services;

// Re-export the public surface
pub use dto::{
    ChatResponse, ChatSummaryResponse, CreateChatRequest, HealthResponse, LoginRequest,
    LogoutRequest, MessageResponse, ReadinessResponse, RefreshRequest, RegisterRequest,
    SendMessageRequest, SessionResponse, UserResponse,
};
pub use services::{
    AuthService, ChatService, MessageService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
