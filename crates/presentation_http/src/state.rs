//! Application state

use std::sync::Arc;

use application::AskService;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Question answering service
    pub ask_service: Arc<AskService>,
}

impl AppState {
    /// Create state around an ask service
    #[must_use]
    pub fn new(ask_service: AskService) -> Self {
        Self {
            ask_service: Arc::new(ask_service),
        }
    }
}
