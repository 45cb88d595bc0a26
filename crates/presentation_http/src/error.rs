//! API error handling
//!
//! Error responses carry a stable machine-readable `code` alongside the
//! human-readable message. PII rejections additionally list the detected
//! categories so clients can coach the user.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::PiiCategory;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Personal information detected")]
    PiiDetected {
        message: String,
        categories: Vec<PiiCategory>,
    },

    #[error("Rate limited")]
    RateLimited,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable error code
    pub code: String,
    /// Detected PII categories, present only for PII rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii_types: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, pii_types) = match self {
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg, None),
            Self::PiiDetected {
                message,
                categories,
            } => (
                StatusCode::BAD_REQUEST,
                "pii_detected",
                message,
                Some(categories.iter().map(|c| c.label().to_string()).collect()),
            ),
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "Rate limit exceeded".to_string(),
                None,
            ),
            Self::ServiceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ai_unavailable",
                "AI assistant is temporarily unavailable. Please try again later.".to_string(),
                None,
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            pii_types,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::InvalidInput(e.to_string()),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::Inference(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            }
        }
    }
}
