//! Application state for the HTTP server.

use chrono::{DateTime, Utc};

/// Shared application state passed to all handlers.
///
/// The planning core is stateless, so this only carries process metadata.
#[derive(Clone)]
pub struct AppState {
    /// When this server process started serving.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
