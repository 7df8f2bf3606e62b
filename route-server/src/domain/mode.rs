//! Transport mode enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode: {value}")]
pub struct InvalidTransportMode {
    value: String,
}

/// One of the six transport modes the model is allowed to use.
///
/// The set is closed: the response schema restricts the model to exactly
/// these values, and deserialization rejects anything else.
///
/// # Examples
///
/// ```
/// use route_server::domain::TransportMode;
///
/// let mode = TransportMode::parse("SUBWAY").unwrap();
/// assert_eq!(mode, TransportMode::Subway);
/// assert_eq!(mode.as_str(), "SUBWAY");
///
/// // Unknown modes are rejected
/// assert!(TransportMode::parse("ROCKET").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportMode {
    Walk,
    Subway,
    Bus,
    Tram,
    Ferry,
    Taxi,
}

impl TransportMode {
    /// All modes, in schema declaration order.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Walk,
        TransportMode::Subway,
        TransportMode::Bus,
        TransportMode::Tram,
        TransportMode::Ferry,
        TransportMode::Taxi,
    ];

    /// Parse a mode from its wire representation.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportMode> {
        match s {
            "WALK" => Ok(TransportMode::Walk),
            "SUBWAY" => Ok(TransportMode::Subway),
            "BUS" => Ok(TransportMode::Bus),
            "TRAM" => Ok(TransportMode::Tram),
            "FERRY" => Ok(TransportMode::Ferry),
            "TAXI" => Ok(TransportMode::Taxi),
            other => Err(InvalidTransportMode {
                value: other.to_string(),
            }),
        }
    }

    /// Returns the wire representation of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walk => "WALK",
            TransportMode::Subway => "SUBWAY",
            TransportMode::Bus => "BUS",
            TransportMode::Tram => "TRAM",
            TransportMode::Ferry => "FERRY",
            TransportMode::Taxi => "TAXI",
        }
    }

    /// Whether a simulated next-departure countdown makes sense for this mode.
    ///
    /// Walking has no departure to wait for; every other mode gets a
    /// `waitMinutes` estimate from the model.
    pub fn has_departures(&self) -> bool {
        !matches!(self, TransportMode::Walk)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
