//! Web layer: the presentation shell around the route contract.
//!
//! Serves the mobile single-page interface and a JSON endpoint the page
//! calls. All itinerary state lives in the browser for the duration of one
//! search; the server keeps nothing between requests.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
