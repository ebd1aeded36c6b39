//! Widget-wide constants carried over from the original locator behavior.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Latitude of the reserved "no coordinate set" sentinel on the wire.
pub const UNSET_LAT: f64 = 91.0;

/// Longitude of the reserved "no coordinate set" sentinel on the wire.
pub const UNSET_LNG: f64 = 181.0;

/// How many search results participate in the fit-to-bounds box.
/// Results arrive sorted by relevance; bounding the whole set over-zooms.
pub const SEARCH_FIT_LIMIT: usize = 3;

/// Proportional latitude bias applied to the fitted center, scaled by the
/// height of the box. Tuned empirically in the original widget.
pub const CENTER_LAT_BIAS: f64 = 0.004;

/// Initial zoom used before any fit has happened.
pub const DEFAULT_ZOOM: f64 = 16.0;

/// Marker icon size in CSS pixels (width, height).
pub const MARKER_ICON_SIZE: (u32, u32) = (30, 56);

/// Reserved descriptor key for the synthetic search-origin pin,
/// distinct from every location id.
pub const SEARCH_MARKER_KEY: &str = "search";

/// Base CSS class carried by every marker's info content.
pub const MARKER_CONTENT_CLASS: &str = "marker-content";

/// Cluster grid size in pixels when marker clustering is enabled.
pub const CLUSTER_GRID_SIZE: u32 = 60;

/// Query parameter never treated as part of the search filter.
pub const PAGE_QUERY_KEY: &str = "page";
