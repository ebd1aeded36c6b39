//! Actions dispatched into the store.

use crate::core::geo::LatLng;
use crate::data::location::Location;
use crate::store::state::{SearchFilter, Settings};

/// Every mutation of [`LocatorState`](crate::store::state::LocatorState)
/// goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the info panel of the marker with this key.
    OpenMarker(String),
    /// Close whichever marker is open.
    CloseMarker,
    /// Replace the active search filter atomically. Does not touch the
    /// open/closed marker state.
    SetSearchFilter(SearchFilter),
    /// Replace the location list atomically after a fetch. An open marker
    /// absent from the new list stays open and simply highlights nothing.
    LoadLocations(Vec<Location>),
    /// Pin or release the explicit camera center.
    SetCenter(Option<LatLng>),
    /// Set or clear the geocoded search origin.
    SetSearchOrigin(Option<LatLng>),
    /// Replace the presentation settings.
    SetSettings(Settings),
}
