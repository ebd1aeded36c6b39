//! Store state: the single mutable resource of the widget.
//!
//! Everything the view derives from lives here; derived data (bounds,
//! camera, descriptors) is recomputed on every change and never stored.

use crate::core::geo::LatLng;
use crate::data::location::Location;
use serde::{Deserialize, Serialize};

/// Map-panel state: which marker is open and where the camera is pinned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MapState {
    /// Key of the marker whose info panel is open, if any. At most one
    /// marker is open at a time.
    pub open: Option<String>,
    /// Explicit camera center. When set the view pans here and skips
    /// fit-to-bounds entirely.
    pub center: Option<LatLng>,
    /// Geocoded center of the submitted search, included in the marker
    /// bounds and rendered as the search pin.
    pub search_origin: Option<LatLng>,
}

impl MapState {
    /// True when `key` is the currently open marker.
    pub fn is_open(&self, key: &str) -> bool {
        self.open.as_deref() == Some(key)
    }
}

/// The active search filter, seeded from the page URL at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub address: String,
    /// Search radius; `-1` means no radius was chosen.
    pub radius: i32,
    pub category: String,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            address: String::new(),
            radius: -1,
            category: String::new(),
        }
    }
}

/// Unit used when formatting distances in the location list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

impl DistanceUnit {
    /// Formats a distance given in meters, e.g. `"3.9 km"` or `"2.5 mi"`.
    pub fn format(&self, meters: f64) -> String {
        match self {
            DistanceUnit::Km => format!("{:.1} km", meters / 1000.0),
            DistanceUnit::Mi => format!("{:.1} mi", meters / 1609.344),
        }
    }
}

/// Page-level presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    pub unit: DistanceUnit,
}

/// The whole store state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocatorState {
    pub map: MapState,
    pub search: SearchFilter,
    pub settings: Settings,
    pub locations: Vec<Location>,
}

impl LocatorState {
    /// A search is active once an address has been submitted; the bounds
    /// computation then considers only the top results.
    pub fn search_active(&self) -> bool {
        !self.search.address.is_empty()
    }

    /// Looks up a location by marker key.
    pub fn location(&self, key: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == key)
    }
}
