//! # locfinder
//!
//! The core of a location-finder map widget: a list of geocoded locations
//! synchronized with a third-party map view, a search filter persisted in
//! the page URL, and a small Redux-style store funneling every mutation.
//!
//! The crate never talks to a concrete maps SDK. The host injects a
//! [`MapSurface`] implementation and the widget replays marker sets and
//! camera moves into it whenever the store changes.

pub mod core;
pub mod data;
pub mod marker;
pub mod prelude;
pub mod store;
pub mod view;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    camera::{marker_bounds, plan_camera, CameraAction},
    config::WidgetOptions,
    geo::{LatLng, LatLngBounds},
};

pub use crate::data::{location::Location, source::LocationSource};

pub use crate::marker::{descriptor::MarkerDescriptor, presenter::present};

pub use crate::store::{
    actions::Action,
    state::{LocatorState, MapState, SearchFilter, Settings},
    Store,
};

pub use crate::view::{
    provider::{MapSurface, RecordingSurface},
    Locator, LocatorView,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, LocatorError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid location record: {0}")]
    InvalidLocation(String),
}

/// Error type alias for convenience
pub type Error = LocatorError;
