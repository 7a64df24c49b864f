//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::DirectionsProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Where directions come from (live API or mock)
    pub directions: Arc<dyn DirectionsProvider>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directions: impl DirectionsProvider + 'static) -> Self {
        Self {
            directions: Arc::new(directions),
        }
    }
}
