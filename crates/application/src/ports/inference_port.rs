//! Inference port
//!
//! The seam between the application layer and whichever text-generation
//! provider is wired in. The provider is consumed as a single operation:
//! one prompt in, one completion out.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of a successful inference call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResult {
    /// Generated text, passed through verbatim
    pub content: String,
    /// Model that produced it
    pub model: String,
    /// Total tokens consumed, when the provider reports usage
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Port for text-generation providers
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a completion for a fully-built prompt
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;

    /// Whether the provider is currently reachable
    async fn is_healthy(&self) -> bool;

    /// Name of the configured model
    fn model_name(&self) -> String;
}
