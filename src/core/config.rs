//! Widget configuration.
//!
//! Everything the host page used to pass as props: the fallback camera,
//! clustering behavior, optional style JSON for the maps provider, and the
//! marker image paths.

use crate::core::constants::{CLUSTER_GRID_SIZE, DEFAULT_ZOOM};
use crate::core::geo::LatLng;

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetOptions {
    /// Camera center before any location data has arrived.
    pub default_center: LatLng,
    /// Zoom level before any fit has happened.
    pub default_zoom: f64,
    /// Whether nearby markers collapse into clusters.
    pub clusters: bool,
    /// Cluster grid size in pixels.
    pub cluster_grid_size: u32,
    /// Provider-specific style document, passed through untouched.
    pub map_style: Option<serde_json::Value>,
    /// Icon URL for ordinary location markers.
    pub marker_icon: Option<String>,
    /// Icon URL for the synthetic search-origin pin. Without it no
    /// search pin is rendered.
    pub search_marker_icon: Option<String>,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            default_center: LatLng::default(),
            default_zoom: DEFAULT_ZOOM,
            clusters: false,
            cluster_grid_size: CLUSTER_GRID_SIZE,
            map_style: None,
            marker_icon: None,
            search_marker_icon: None,
        }
    }
}

impl WidgetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback camera center
    pub fn with_default_center(mut self, center: LatLng) -> Self {
        self.default_center = center;
        self
    }

    /// Set the initial zoom level
    pub fn with_default_zoom(mut self, zoom: f64) -> Self {
        self.default_zoom = zoom;
        self
    }

    /// Enable or disable marker clustering
    pub fn with_clusters(mut self, enabled: bool) -> Self {
        self.clusters = enabled;
        self
    }

    /// Set the cluster grid size in pixels
    pub fn with_cluster_grid_size(mut self, size: u32) -> Self {
        self.cluster_grid_size = size;
        self
    }

    /// Set the provider style document
    pub fn with_map_style(mut self, style: serde_json::Value) -> Self {
        self.map_style = Some(style);
        self
    }

    /// Set the icon URL for location markers
    pub fn with_marker_icon(mut self, url: impl Into<String>) -> Self {
        self.marker_icon = Some(url.into());
        self
    }

    /// Set the icon URL for the search-origin pin
    pub fn with_search_marker_icon(mut self, url: impl Into<String>) -> Self {
        self.search_marker_icon = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WidgetOptions::default();
        assert_eq!(options.default_center, LatLng::new(0.0, 0.0));
        assert_eq!(options.default_zoom, 16.0);
        assert!(!options.clusters);
        assert_eq!(options.cluster_grid_size, 60);
        assert!(options.map_style.is_none());
        assert!(options.search_marker_icon.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let options = WidgetOptions::new()
            .with_default_center(LatLng::new(52.52, 13.405))
            .with_default_zoom(12.0)
            .with_clusters(true)
            .with_marker_icon("/img/pin.png")
            .with_search_marker_icon("/img/search-pin.png");

        assert_eq!(options.default_center.lat, 52.52);
        assert_eq!(options.default_zoom, 12.0);
        assert!(options.clusters);
        assert_eq!(options.marker_icon.as_deref(), Some("/img/pin.png"));
        assert_eq!(
            options.search_marker_icon.as_deref(),
            Some("/img/search-pin.png")
        );
    }
}
