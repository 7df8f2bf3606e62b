//! A single leg of an itinerary.

use serde::{Deserialize, Serialize};

use super::TransportMode;

/// One leg of a route, in travel order.
///
/// All text fields are free text invented by the model. `duration` is a
/// display label ("約 10 分鐘"), not a parseable quantity. `location_name`
/// must be a concrete, map-searchable place name; the detail view links it
/// straight into a map search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    /// Transport mode for this leg.
    pub mode: TransportMode,

    /// What the user should do, in Traditional Chinese.
    pub instruction: String,

    /// Display label for the leg's duration.
    pub duration: String,

    /// Station, stop or place name for map lookup.
    pub location_name: String,

    /// Line or route identifier (e.g. "荃灣綫", "巴士 101").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,

    /// Simulated minutes until the next departure. Only meaningful for
    /// modes with departures; absent for walking legs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_minutes: Option<u32>,
}
