//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Error body written by the API's error handler.
///
/// `errors` carries individual messages for validation failures only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// 400 response listing each validation message.
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            status: 400,
            message: errors.join(", "),
            errors,
        }
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Something went wrong.")
    }
}
