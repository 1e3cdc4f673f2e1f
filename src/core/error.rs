use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::collections::BTreeMap;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Per-field validation messages keyed by form field name
pub type FieldErrors = BTreeMap<String, String>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Submitted form fields failed validation
    #[error("Invalid input in {} field(s)", .0.len())]
    InvalidFields(FieldErrors),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        let mut error = serde_json::json!({
            "message": error_message,
            "code": status_code.as_u16(),
        });
        if let AppError::InvalidFields(fields) = self {
            error["fields"] = serde_json::json!(fields);
        }

        HttpResponse::build(status_code).json(serde_json::json!({ "error": error }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
