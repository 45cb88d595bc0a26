//! Domain-level errors

use thiserror::Error;

/// Errors raised by domain value objects and lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A lookup key did not match any known entry
    #[error("{kind} not found: {key}")]
    NotFound { kind: String, key: String },
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            key: key.into(),
        }
    }
}
