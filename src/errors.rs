//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. The rule-engine variants
//! carry the fixed user-facing messages listed in [`messages`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fixed user-facing messages, one per failing condition.
pub mod messages {
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const TODO_NOT_FOUND: &str = "Todo not found";
    pub const MANAGER_NOT_FOUND: &str = "Manager not found";
    pub const UNREGISTERED_USER: &str = "가입되지 않은 유저입니다.";
    pub const MANAGER_USER_NOT_FOUND: &str = "등록하려고 하는 담당자 유저가 존재하지 않습니다.";

    pub const DUPLICATE_EMAIL: &str = "이미 존재하는 이메일입니다.";
    pub const WRONG_PASSWORD: &str = "잘못된 비밀번호입니다.";
    pub const PASSWORD_POLICY: &str =
        "새 비밀번호는 8자 이상이어야 하고, 숫자와 대문자를 포함해야 합니다.";
    pub const SAME_AS_CURRENT: &str = "새 비밀번호는 기존 비밀번호와 같을 수 없습니다.";
    pub const INVALID_ROLE: &str = "유효하지 않은 UserRole";

    pub const TODO_OWNER_INVALID: &str =
        "담당자를 등록하려고 하는 유저가 일정을 만든 유저가 유효하지 않습니다.";
    pub const SELF_ASSIGNMENT: &str = "일정 작성자는 본인을 담당자로 등록할 수 없습니다.";
    pub const NOT_TODO_OWNER: &str = "해당 일정을 만든 유저가 유효하지 않습니다.";
    pub const MANAGER_TODO_MISMATCH: &str = "해당 일정에 등록된 담당자가 아닙니다.";

    pub const WEATHER_FETCH_FAILED: &str = "날씨 데이터를 가져오는데 실패했습니다.";
    pub const WEATHER_EMPTY: &str = "날씨 데이터가 없습니다.";
    pub const WEATHER_TODAY_MISSING: &str = "오늘에 해당하는 날씨 데이터를 찾을 수 없습니다.";
    pub const ACCESS_DENIED: &str = "Access denied";
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("{}", messages::WRONG_PASSWORD)]
    InvalidCredentials,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{}", messages::DUPLICATE_EMAIL)]
    DuplicateEmail,

    // Rule violations
    #[error("{0}")]
    PolicyViolation(String),

    #[error("{}", messages::SAME_AS_CURRENT)]
    SameAsCurrent,

    #[error("{}", messages::SELF_ASSIGNMENT)]
    SelfAssignment,

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    Inconsistent(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("{0}")]
    Upstream(String),

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::PolicyViolation(_) => "PASSWORD_POLICY",
            AppError::SameAsCurrent => "SAME_AS_CURRENT",
            AppError::SelfAssignment => "SELF_ASSIGNMENT",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::Inconsistent(_) => "INCONSISTENT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Jwt(_) => "AUTH_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials | AppError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail | AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::PolicyViolation(_)
            | AppError::SameAsCurrent
            | AppError::SelfAssignment
            | AppError::Inconsistent(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Upstream(msg) => {
                tracing::warn!("Upstream error: {}", msg);
                msg.clone()
            }

            // Rule-engine errors already carry their fixed message
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(message))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        AppError::Forbidden(message.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
