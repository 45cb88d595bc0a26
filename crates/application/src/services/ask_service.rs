//! Ask orchestration service
//!
//! Drives a single question through the pipeline: build the prompt, call
//! the provider, append the disclaimer. Degrades to the canned fallback
//! path when no provider is configured or the provider call fails, so
//! `ask` itself never returns an error.

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{AiAnswer, AskRequest};
use tracing::{info, instrument, warn};

use crate::ports::inference_port::InferencePort;
use crate::services::fallback::fallback_answer;
use crate::services::pii_validator::PiiValidator;
use crate::services::prompt_builder::build_prompt;

/// Orchestrates question answering with graceful degradation
pub struct AskService {
    inference: Option<Arc<dyn InferencePort>>,
    validator: PiiValidator,
}

impl AskService {
    /// Create a service backed by a provider
    #[must_use]
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self {
            inference: Some(inference),
            validator: PiiValidator::new(),
        }
    }

    /// Create a service that always answers from the fallback path
    #[must_use]
    pub const fn without_inference() -> Self {
        Self {
            inference: None,
            validator: PiiValidator::new(),
        }
    }

    /// Whether a provider is wired in
    #[must_use]
    pub const fn has_inference(&self) -> bool {
        self.inference.is_some()
    }

    /// Answer a question
    ///
    /// Callers are expected to have run the PII gate already; `today` feeds
    /// the date-sensitive reference facts in the prompt and fallback.
    #[instrument(skip(self, request), fields(has_context = request.context.is_some()))]
    pub async fn ask(&self, request: &AskRequest, today: NaiveDate) -> AiAnswer {
        let Some(inference) = &self.inference else {
            info!("no provider configured, answering from fallback");
            return fallback_answer(&request.question, today);
        };

        let prompt = build_prompt(&request.question, request.context.as_deref(), today);

        match inference.generate(&prompt).await {
            Ok(result) => {
                info!(
                    model = %result.model,
                    latency_ms = result.latency_ms,
                    tokens_used = result.tokens_used,
                    "provider answered"
                );
                AiAnswer::with_disclaimer(result.content)
            }
            Err(error) => {
                warn!(
                    error = %error,
                    question = %self.validator.sanitize_for_logging(&request.question),
                    "provider call failed, answering from fallback"
                );
                fallback_answer(&request.question, today)
            }
        }
    }
}
