//! Integration tests for the Gemini client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! covering success, rate limiting, server errors, and malformed bodies.
#![allow(clippy::unwrap_used)]

use ai_core::{GeminiClient, GeminiConfig, InferenceError};
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GeminiConfig {
    GeminiConfig {
        api_key: Some(SecretString::from("test-api-key")),
        base_url: server.uri(),
        ..GeminiConfig::default()
    }
}

fn sample_response() -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{"text": "The Old Age Grant is R2,180 per month."}],
                "role": "model"
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 14,
            "totalTokenCount": 134
        }
    })
}

#[tokio::test]
async fn generate_returns_candidate_text_and_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let outcome = client.generate("How much is the old age grant?").await.unwrap();

    assert_eq!(outcome.content, "The Old Age Grant is R2,180 per month.");
    assert_eq!(outcome.model, "gemini-2.0-flash");
    assert_eq!(outcome.tokens_used, Some(134));
}

#[tokio::test]
async fn generate_sends_prompt_and_sampling_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"parts": [{"text": "PROMPT TEXT"}]}],
            "generationConfig": {
                "temperature": 0.7,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 1024
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    client.generate("PROMPT TEXT").await.unwrap();
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let err = client.generate("question").await.unwrap_err();

    assert!(matches!(err, InferenceError::RateLimited));
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let err = client.generate("question").await.unwrap_err();

    match err {
        InferenceError::ServerError(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("internal failure"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let err = client.generate("question").await.unwrap_err();

    assert!(matches!(err, InferenceError::EmptyResponse(_)));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let err = client.generate("question").await.unwrap_err();

    assert!(matches!(err, InferenceError::InvalidResponse(_)));
}

#[tokio::test]
async fn safety_blocked_candidate_reports_finish_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let err = client.generate("question").await.unwrap_err();

    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn health_check_true_when_model_reachable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models/gemini-2.0-flash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "models/gemini-2.0-flash"
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    assert!(client.health_check().await);
}

#[tokio::test]
async fn health_check_false_on_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    assert!(!client.health_check().await);
}
