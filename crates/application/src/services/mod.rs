//! Application services

pub mod ask_service;
pub mod fallback;
pub mod pii_validator;
pub mod prompt_builder;
