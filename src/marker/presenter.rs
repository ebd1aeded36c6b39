//! Turns the location list into marker descriptors.

use crate::core::constants::{MARKER_CONTENT_CLASS, SEARCH_MARKER_KEY};
use crate::core::geo::LatLng;
use crate::data::location::Location;
use crate::marker::categories::categories_to_classes;
use crate::marker::descriptor::{MarkerDescriptor, MarkerIcon};

/// Derives one descriptor per location, plus the synthetic search pin when
/// both a search origin and a search-pin icon are available.
///
/// `open_key` marks at most one descriptor as open, by key equality; a key
/// that matches no location simply leaves everything closed.
pub fn present(
    locations: &[Location],
    open_key: Option<&str>,
    search_origin: Option<LatLng>,
    marker_icon: Option<&str>,
    search_marker_icon: Option<&str>,
) -> Vec<MarkerDescriptor> {
    let mut descriptors: Vec<MarkerDescriptor> = locations
        .iter()
        .map(|location| MarkerDescriptor {
            key: location.id.clone(),
            position: location.position,
            is_open: open_key == Some(location.id.as_str()),
            icon: marker_icon.map(MarkerIcon::new),
            css_class: content_class(&location.categories),
            clickable: true,
        })
        .collect();

    if let (Some(origin), Some(icon)) = (search_origin, search_marker_icon) {
        descriptors.push(MarkerDescriptor {
            key: SEARCH_MARKER_KEY.to_string(),
            position: origin,
            is_open: false,
            icon: Some(MarkerIcon::new(icon)),
            css_class: MARKER_CONTENT_CLASS.to_string(),
            clickable: false,
        });
    }

    descriptors
}

fn content_class(categories: &[String]) -> String {
    let fragments = categories_to_classes(categories);
    if fragments.is_empty() {
        MARKER_CONTENT_CLASS.to_string()
    } else {
        format!("{MARKER_CONTENT_CLASS} {fragments}")
    }
}
