//! Google Gemini client

pub mod client;

pub use client::GeminiClient;
