//! Application layer for GrantGuide SA
//!
//! Orchestrates the PII gate and the prompt pipeline: validate input, build
//! a grounded prompt, call the inference port, and degrade to deterministic
//! fallback answers when no provider is reachable.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{InferencePort, InferenceResult};
pub use services::ask_service::AskService;
pub use services::fallback;
pub use services::pii_validator::PiiValidator;
pub use services::prompt_builder::{build_prompt, system_prompt};
