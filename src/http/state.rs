//! Application state for the HTTP server.

use crate::db::repository::MarksRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for saved-marks persistence
    pub repository: Arc<dyn MarksRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn MarksRepository>) -> Self {
        Self { repository }
    }
}
