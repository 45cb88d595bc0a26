//! AI provider clients
//!
//! HTTP clients for hosted text-generation APIs. This crate knows nothing
//! about grants or prompts; it takes fully-built prompt text and returns
//! generated text.

pub mod config;
pub mod error;
pub mod gemini;

pub use config::GeminiConfig;
pub use error::InferenceError;
pub use gemini::GeminiClient;
pub use gemini::client::GenerationOutcome;
