//! Centralized error handling - every error response body is written here.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use inkwell_shared::ErrorResponse;
use std::fmt;

/// Application-level error type, rendered by its [`ResponseError`] impl.
#[derive(Debug)]
pub enum AppError {
    /// An error that already knows its status and client-facing message.
    Http { status: StatusCode, message: String },
    /// Request body failed validation; one message per problem.
    Validation(Vec<String>),
    /// Anything unclassified. The detail is logged, never returned.
    Internal(String),
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Http {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found.")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http { status, message } => write!(f, "{}: {}", status, message),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors.join(", ")),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Http { status, .. } => *status,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Http { status, message } => ErrorResponse::new(status.as_u16(), message),
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::not_found())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
