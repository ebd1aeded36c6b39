//! Renderable marker descriptors, derived per presentation pass and never
//! stored.

use crate::core::constants::MARKER_ICON_SIZE;
use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Icon of a marker: an image URL plus the size it is scaled to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub url: String,
    /// Scaled size in CSS pixels (width, height).
    pub scaled_size: (u32, u32),
}

impl MarkerIcon {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            scaled_size: MARKER_ICON_SIZE,
        }
    }
}

/// One renderable pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    /// Location id, or the reserved search key for the search pin.
    pub key: String,
    pub position: LatLng,
    /// Whether this marker's info panel is open.
    pub is_open: bool,
    pub icon: Option<MarkerIcon>,
    /// Class list for the info content, base class plus category fragments.
    pub css_class: String,
    /// The search pin is decoration and takes no clicks.
    pub clickable: bool,
}
