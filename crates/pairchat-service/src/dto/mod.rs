//! Request and response DTOs for the API

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateChatRequest, LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest,
    SendMessageRequest,
};
pub use responses::{
    ChatResponse, ChatSummaryResponse, HealthResponse, MessageResponse, ReadinessResponse,
    SessionResponse, UserResponse,
};
