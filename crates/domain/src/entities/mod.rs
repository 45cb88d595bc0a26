//! Domain entities

pub mod answer;
pub mod pii;

pub use answer::{AiAnswer, AskRequest, RESPONSE_DISCLAIMER};
pub use pii::{PiiCategory, PiiScanResult};
