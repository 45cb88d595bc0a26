//! Ports (trait seams) to external collaborators

pub mod inference_port;

pub use inference_port::{InferencePort, InferenceResult};
