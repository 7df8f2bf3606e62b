//! Domain types for AI-synthesized transit itineraries.
//!
//! Everything here is produced by the generative model and consumed by the
//! web shell. Values live for one search only: a re-search replaces the
//! whole set, and nothing is persisted.

mod mode;
mod query;
mod route;
mod step;

pub use mode::{InvalidTransportMode, TransportMode};
pub use query::SearchQuery;
pub use route::RouteOption;
pub use step::RouteStep;
