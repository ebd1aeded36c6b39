//! The location list panel next to the map.

use crate::store::state::LocatorState;
use serde::{Deserialize, Serialize};

/// One row of the list panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Marker key; clicking the row opens this marker.
    pub key: String,
    pub title: String,
    /// Distance from the search origin, formatted per the unit setting.
    /// Absent when no search origin is set.
    pub distance: Option<String>,
    /// Whether this row's marker is the open one.
    pub is_current: bool,
}

/// Derives the list rows from the current state, in location order.
pub fn list_entries(state: &LocatorState) -> Vec<ListEntry> {
    state
        .locations
        .iter()
        .map(|location| ListEntry {
            key: location.id.clone(),
            title: location.title().to_string(),
            distance: state.map.search_origin.map(|origin| {
                state
                    .settings
                    .unit
                    .format(origin.distance_to(&location.position))
            }),
            is_current: state.map.is_open(&location.id),
        })
        .collect()
}
