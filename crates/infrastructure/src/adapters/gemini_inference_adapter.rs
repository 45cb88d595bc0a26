//! Gemini inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{GeminiClient, GeminiConfig, InferenceError};
use application::{
    error::ApplicationError,
    ports::inference_port::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the hosted Gemini API
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    client: GeminiClient,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: GeminiConfig) -> Result<Self, ApplicationError> {
        let client = GeminiClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited => ApplicationError::RateLimited,
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let outcome = self
            .client
            .generate(prompt)
            .await
            .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            model = %outcome.model,
            tokens = ?outcome.tokens_used,
            latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: outcome.content,
            model: outcome.model,
            tokens_used: outcome.tokens_used,
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.client.health_check().await
    }

    fn model_name(&self) -> String {
        self.client.model().to_string()
    }
}
