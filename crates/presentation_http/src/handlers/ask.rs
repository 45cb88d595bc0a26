//! Ask handler
//!
//! Guards the pipeline: length checks first, then the PII gate, and only
//! clean questions reach the ask service. PII rejection happens before any
//! prompt is built so personal data never leaves the process.

use application::services::pii_validator::PiiValidator;
use axum::{Json, extract::State};
use chrono::Utc;
use domain::AskRequest;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Question length bounds, in characters
const MIN_QUESTION_CHARS: usize = 10;
const MAX_QUESTION_CHARS: usize = 1000;

/// Ask request body
#[derive(Debug, Deserialize)]
pub struct AskBody {
    /// User question
    pub question: String,
    /// Optional context block to ground the answer
    #[serde(default)]
    pub context: Option<String>,
}

/// Ask response body
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Answer text, disclaimer included
    pub answer: String,
}

/// Handle an ask request
#[instrument(skip(state, body), fields(question_chars = body.question.chars().count()))]
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<AskBody>,
) -> Result<Json<AskResponse>, ApiError> {
    if body.question.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "Please provide a question".to_string(),
        ));
    }

    let chars = body.question.chars().count();
    if chars < MIN_QUESTION_CHARS {
        return Err(ApiError::InvalidInput(
            "Please provide more detail in your question".to_string(),
        ));
    }
    if chars > MAX_QUESTION_CHARS {
        return Err(ApiError::InvalidInput(
            "Question is too long. Please keep it under 1000 characters.".to_string(),
        ));
    }

    let scan = PiiValidator::new().validate(&body.question);
    if !scan.is_valid {
        let message = scan.message.unwrap_or_else(|| {
            "Please don't share personal information like ID numbers or bank details. \
             We don't need this to help you."
                .to_string()
        });
        return Err(ApiError::PiiDetected {
            message,
            categories: scan.categories,
        });
    }

    let mut request = AskRequest::new(body.question).map_err(application::ApplicationError::from)?;
    if let Some(context) = body.context {
        request = request.with_context(context);
    }

    let answer = state
        .ask_service
        .ask(&request, Utc::now().date_naive())
        .await;

    Ok(Json(AskResponse {
        answer: answer.answer,
    }))
}
