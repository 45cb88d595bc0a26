//! Port adapters

mod gemini_inference_adapter;

pub use gemini_inference_adapter::GeminiInferenceAdapter;
