//! Service layer error types
//!
//! Every remote-call failure is caught at this boundary, logged with an
//! operation-specific tag, and re-raised as one of these variants carrying a
//! user-safe message. Provider internals (database, session store) never
//! reach the caller; the message text below is exactly what the UI shows.

use pairchat_common::AppError;
use pairchat_core::DomainError;
use std::fmt;

/// Service layer error type, tagged by the failing operation
#[derive(Debug)]
pub enum ServiceError {
    /// Registration failed (account or profile step)
    Registration,

    /// Sign-in failed; deliberately uniform for every underlying cause
    InvalidCredentials,

    /// Logout failed (no active session, or the store failed)
    Logout,

    /// Profile lookup failed
    ProfileFetch,

    /// User roster listing failed
    UserFetch,

    /// Chat listing or lookup failed
    ChatFetch,

    /// Chat creation failed
    ChatCreate,

    /// Message listing failed
    MessageFetch,

    /// Message send failed
    Send,

    /// Message delete failed
    Delete,

    /// Missing or invalid argument
    Validation(String),

    /// Domain rule violation (self-chat, not-found, duplicate email, ...)
    Domain(DomainError),

    /// Application error (token validation, password hashing, ...)
    App(AppError),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration => write!(f, "Failed to register user"),
            Self::InvalidCredentials => write!(f, "Invalid email or password"),
            Self::Logout => write!(f, "Failed to log out"),
            Self::ProfileFetch => write!(f, "Failed to fetch user profile"),
            Self::UserFetch => write!(f, "Failed to fetch users"),
            Self::ChatFetch => write!(f, "Failed to load chats"),
            Self::ChatCreate => write!(f, "Failed to create chat"),
            Self::MessageFetch => write!(f, "Failed to load messages"),
            Self::Send => write!(f, "Failed to send message"),
            Self::Delete => write!(f, "Failed to delete message"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials => 401,
            Self::Validation(_) => 400,
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::Registration
            | Self::Logout
            | Self::ProfileFetch
            | Self::UserFetch
            | Self::ChatFetch
            | Self::ChatCreate
            | Self::MessageFetch
            | Self::Send
            | Self::Delete
            | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Registration => "REGISTRATION_FAILED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Logout => "LOGOUT_FAILED",
            Self::ProfileFetch => "PROFILE_FETCH_FAILED",
            Self::UserFetch => "USER_FETCH_FAILED",
            Self::ChatFetch => "CHAT_FETCH_FAILED",
            Self::ChatCreate => "CHAT_CREATE_FAILED",
            Self::MessageFetch => "MESSAGE_FETCH_FAILED",
            Self::Send => "SEND_FAILED",
            Self::Delete => "DELETE_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => AppError::InvalidCredentials,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            other => AppError::Internal(anyhow::anyhow!(other.to_string())),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
