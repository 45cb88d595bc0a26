//! Infrastructure layer
//!
//! Configuration loading and the adapters that plug concrete clients into
//! the application's ports.

pub mod adapters;
pub mod config;

pub use adapters::GeminiInferenceAdapter;
pub use config::{AppConfig, ServerConfig};
