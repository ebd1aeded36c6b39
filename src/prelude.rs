//! Prelude module for common locfinder types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use locfinder::prelude::*;`

pub use crate::core::{
    camera::{adjusted_center, marker_bounds, plan_camera, CameraAction},
    config::WidgetOptions,
    geo::{LatLng, LatLngBounds},
};

pub use crate::data::{
    location::{decode_locations, Location},
    source::{HttpLocationSource, LocationSource},
};

pub use crate::marker::{
    categories::categories_to_classes,
    descriptor::{MarkerDescriptor, MarkerIcon},
    presenter::present,
};

pub use crate::store::{
    actions::Action,
    state::{DistanceUnit, LocatorState, MapState, SearchFilter, Settings},
    Store,
};

pub use crate::view::{
    list::{list_entries, ListEntry},
    provider::{MapSurface, RecordingSurface, SurfaceCall},
    Locator, LocatorView,
};

pub use crate::{Error as LocatorError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
