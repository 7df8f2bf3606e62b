//! Search input.

use serde::{Deserialize, Serialize};

/// A transient origin/destination pair entered by the user.
///
/// Both fields are free text in whatever form the user typed them; they are
/// interpolated into the model prompt as-is. The web layer rejects blank
/// fields before a query ever reaches the model contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
}

impl SearchQuery {
    /// Whether both endpoints are non-blank after trimming.
    pub fn is_complete(&self) -> bool {
        !self.origin.trim().is_empty() && !self.destination.trim().is_empty()
    }
}
