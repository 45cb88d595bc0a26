//! GrantGuide SA HTTP API
//!
//! Thin HTTP surface over the application layer: one ask endpoint guarded
//! by input validation and the PII gate, plus a health probe.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
