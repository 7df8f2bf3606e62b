//! Application state for the web layer.

use std::sync::Arc;

use crate::gemini::RouteSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Route backend (live Gemini client or file-backed mock)
    pub routes: Arc<RouteSource>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: RouteSource) -> Self {
        Self {
            routes: Arc::new(routes),
        }
    }
}
