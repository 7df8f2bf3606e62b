//! Mock route client for development and tests without an API key.
//!
//! Serves a canned route set from a JSON file as if the model had
//! generated it.

use std::path::Path;

use crate::domain::RouteOption;

use super::error::RouteError;

/// Mock client that returns the same routes for every query.
///
/// The backing file holds a JSON array in the same shape the model is asked
/// to produce, so fixtures double as documentation of the wire format.
#[derive(Debug, Clone)]
pub struct MockRouteClient {
    routes: Vec<RouteOption>,
}

impl MockRouteClient {
    /// Load canned routes from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RouteError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| RouteError::Api {
            status: 0,
            message: format!("failed to read mock routes from {path:?}: {e}"),
        })?;

        let routes = serde_json::from_str(&json).map_err(|e| RouteError::MalformedResponse {
            message: format!("invalid mock routes in {path:?}: {e}"),
            body: json,
        })?;

        Ok(Self { routes })
    }

    /// Build a mock directly from a route set.
    pub fn from_routes(routes: Vec<RouteOption>) -> Self {
        Self { routes }
    }

    /// Return the canned routes, ignoring the query.
    ///
    /// Mimics the `GeminiClient::fetch_routes` interface.
    pub async fn fetch_routes(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> Result<Vec<RouteOption>, RouteError> {
        Ok(self.routes.clone())
    }
}
