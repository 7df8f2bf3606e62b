//! A candidate itinerary.

use serde::{Deserialize, Serialize};

use super::RouteStep;

/// One candidate itinerary proposed by the model.
///
/// `id` is model-generated and only unique within a single response set;
/// it must never be used as a stable key across searches. `steps` is in
/// travel order and is never reordered downstream. `cost` and
/// `total_duration` are display labels, not parsed quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    /// Opaque identifier, scoped to one response set.
    pub id: String,

    /// Short route summary (e.g. "港鐵 → 巴士 5號").
    pub summary: String,

    /// Display label for the end-to-end duration.
    pub total_duration: String,

    /// Currency-formatted cost label (e.g. "HK$ 12.5").
    pub cost: String,

    /// Descriptive tags ("最快", "最平"); may be empty.
    pub tags: Vec<String>,

    /// Legs in travel order.
    pub steps: Vec<RouteStep>,
}
