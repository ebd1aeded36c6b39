//! The injected maps-provider capability.
//!
//! The widget never reaches for a concrete maps SDK; the host hands it an
//! implementation of [`MapSurface`] and every rendering decision is replayed
//! through it. Tests use [`RecordingSurface`].

use crate::core::geo::{LatLng, LatLngBounds};
use crate::marker::descriptor::MarkerDescriptor;

/// Operations the widget needs from a maps provider.
pub trait MapSurface {
    /// Replace the rendered marker set.
    fn set_markers(&mut self, markers: Vec<MarkerDescriptor>);

    /// Pan the camera, keeping the current zoom.
    fn pan_to(&mut self, center: LatLng);

    /// Fit the camera to the box.
    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    /// The provider's notion of the center of a box. The default is the
    /// arithmetic midpoint; providers with anti-meridian handling override.
    fn bounds_center(&self, bounds: &LatLngBounds) -> LatLng {
        bounds.center()
    }
}

/// A call recorded by [`RecordingSurface`], in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetMarkers(Vec<MarkerDescriptor>),
    PanTo(LatLng),
    FitBounds(LatLngBounds),
}

/// Test double that records every surface call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently set marker list, if any.
    pub fn markers(&self) -> Option<&[MarkerDescriptor]> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetMarkers(markers) => Some(markers.as_slice()),
            _ => None,
        })
    }

    /// The most recent pan target, if any.
    pub fn last_pan(&self) -> Option<LatLng> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::PanTo(center) => Some(*center),
            _ => None,
        })
    }

    pub fn fit_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::FitBounds(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl MapSurface for RecordingSurface {
    fn set_markers(&mut self, markers: Vec<MarkerDescriptor>) {
        self.calls.push(SurfaceCall::SetMarkers(markers));
    }

    fn pan_to(&mut self, center: LatLng) {
        self.calls.push(SurfaceCall::PanTo(center));
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.calls.push(SurfaceCall::FitBounds(bounds.clone()));
    }
}
