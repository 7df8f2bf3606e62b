//! The itinerary request contract.
//!
//! Builds a natural-language prompt plus a formal output schema from an
//! origin/destination pair, submits it to the Gemini `generateContent`
//! endpoint in structured-output mode, defensively decodes the reply, and
//! maps every failure onto a small user-facing error taxonomy.
//!
//! Key characteristics of the endpoint:
//! - Structured-output mode constrains but does not guarantee the shape:
//!   required fields are re-enforced at decode time
//! - Replies are sometimes wrapped in a Markdown code fence even when
//!   a JSON MIME type was requested
//! - The API key is read from the environment on every call, never cached

mod client;
mod decode;
mod error;
mod mock;
mod prompt;
mod schema;
mod types;

pub use client::{GeminiClient, GeminiConfig};
pub use decode::{decode_route_options, strip_code_fence};
pub use error::RouteError;
pub use mock::MockRouteClient;
pub use prompt::build_prompt;
pub use schema::{Schema, SchemaType, route_options_schema};
pub use types::{GenerateContentRequest, GenerateContentResponse};

use crate::domain::RouteOption;

/// Where the web shell gets its routes from.
///
/// Dispatches between the live Gemini client and the file-backed mock so
/// the shell can run without a key during development.
#[derive(Debug, Clone)]
pub enum RouteSource {
    Live(GeminiClient),
    Mock(MockRouteClient),
}

impl RouteSource {
    /// Fetch itineraries from whichever backend this source wraps.
    pub async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteOption>, RouteError> {
        match self {
            RouteSource::Live(client) => client.fetch_routes(origin, destination).await,
            RouteSource::Mock(mock) => mock.fetch_routes(origin, destination).await,
        }
    }
}
