//! Ask/answer entities
//!
//! Transient value objects for a single question/answer exchange. Nothing
//! here is persisted; each value is created and consumed within one request.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Disclaimer appended to every assistant answer, regardless of whether the
/// answer came from the provider or from the canned fallback path.
pub const RESPONSE_DISCLAIMER: &str = "This information is provided by GrantGuide SA, \
    an unofficial platform. For official information and services, please visit \
    sassa.gov.za or your nearest SASSA office.";

/// A user question with optional retrieval context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Free-text question
    pub question: String,
    /// Optional context block to ground the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl AskRequest {
    /// Create a request from a non-empty question
    pub fn new(question: impl Into<String>) -> Result<Self, DomainError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(DomainError::validation("question must not be empty"));
        }
        Ok(Self {
            question,
            context: None,
        })
    }

    /// Attach a context block
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// An assistant answer, guaranteed to carry the disclaimer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnswer {
    /// Full answer text, ending with [`RESPONSE_DISCLAIMER`]
    pub answer: String,
}

impl AiAnswer {
    /// Wrap raw provider or fallback text, appending the disclaimer trailer
    ///
    /// This is the only construction path, so every answer contains the
    /// disclaimer by construction.
    #[must_use]
    pub fn with_disclaimer(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            answer: format!("{raw}\n\n---\n{RESPONSE_DISCLAIMER}"),
        }
    }
}
