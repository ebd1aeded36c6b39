//! Marker bounds and camera planning.
//!
//! The one genuinely computed behavior of the widget: collect the considered
//! marker coordinates into a bounding box, then decide whether the view pans
//! straight to an explicit center or fits the box and pans to a center biased
//! slightly toward the top of the box so pins are not hidden under the
//! fixed info panel.

use crate::core::constants::{CENTER_LAT_BIAS, SEARCH_FIT_LIMIT};
use crate::core::geo::{LatLng, LatLngBounds};

/// What the view should do with the camera after a state change.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraAction {
    /// Pan straight to a coordinate, leaving the zoom alone.
    PanTo(LatLng),
    /// Fit the viewport to `bounds`, then pan to the adjusted `center`.
    FitThenPanTo {
        bounds: LatLngBounds,
        center: LatLng,
    },
}

/// Computes the bounding box of the rendered markers.
///
/// While a search is active only the first [`SEARCH_FIT_LIMIT`] positions are
/// considered; the search origin, when set, is always included. With nothing
/// to consider the result is a point box at `default_center`, which callers
/// detect via [`LatLngBounds::is_point`] before fitting.
pub fn marker_bounds(
    positions: &[LatLng],
    search_origin: Option<LatLng>,
    search_active: bool,
    default_center: LatLng,
) -> LatLngBounds {
    let limit = if search_active {
        SEARCH_FIT_LIMIT
    } else {
        positions.len()
    };

    let mut bounds: Option<LatLngBounds> = None;
    for position in positions.iter().take(limit) {
        match bounds.as_mut() {
            Some(b) => b.extend(position),
            None => bounds = Some(LatLngBounds::from_point(*position)),
        }
    }

    if let Some(origin) = search_origin {
        match bounds.as_mut() {
            Some(b) => b.extend(&origin),
            None => bounds = Some(LatLngBounds::from_point(origin)),
        }
    }

    bounds.unwrap_or_else(|| LatLngBounds::from_point(default_center))
}

/// Biases the fitted center latitude in proportion to the height of the box.
///
/// Cosmetic, not geodesic: `lat + lat * (lat_span * 0.004)`, longitude
/// unchanged.
pub fn adjusted_center(box_center: LatLng, lat_span: f64) -> LatLng {
    LatLng::new(
        box_center.lat + box_center.lat * (lat_span * CENTER_LAT_BIAS),
        box_center.lng,
    )
}

/// Decides the camera move for the current bounds.
///
/// An explicit center always wins and pans directly, regardless of the box.
/// Otherwise the view fits the box and pans to the adjusted center; a
/// zero-area box suppresses the fit half and only pans.
///
/// `box_center` is the provider's notion of the center of `bounds`, obtained
/// through the injected surface so anti-meridian-aware providers plug in.
pub fn plan_camera(
    bounds: &LatLngBounds,
    explicit_center: Option<LatLng>,
    box_center: LatLng,
) -> CameraAction {
    if let Some(center) = explicit_center {
        return CameraAction::PanTo(center);
    }

    let lat_span = bounds.span().lat.abs();
    let center = adjusted_center(box_center, lat_span);

    if bounds.is_point() {
        CameraAction::PanTo(center)
    } else {
        CameraAction::FitThenPanTo {
            bounds: bounds.clone(),
            center,
        }
    }
}
