//! Location label shown on the home screen.

use serde::{Deserialize, Serialize};

/// Reverse-geocoded address parts. Any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub subregion: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
}

/// Result of asking the platform for the user's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationStatus {
    Pending,
    Resolved(Address),
    PermissionDenied,
    Failed,
}

impl Address {
    /// "City, Subregion, Country", falling back to the county and skipping
    /// empty parts.
    pub fn label(&self) -> String {
        let region = self.subregion.as_deref().or(self.county.as_deref());

        [self.city.as_deref(), region, self.country.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationStatus::Pending => write!(f, "Fetching..."),
            LocationStatus::Resolved(address) => write!(f, "{}", address.label()),
            LocationStatus::PermissionDenied => write!(f, "Permission denied"),
            LocationStatus::Failed => write!(f, "Error fetching location"),
        }
    }
}
