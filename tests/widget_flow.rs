use locfinder::prelude::*;
use serde_json::json;
use url::Url;

/// Integration tests for the full store -> view -> surface loop,
/// driven the way a host page would drive the widget.

fn sample_locations() -> Vec<Location> {
    decode_locations(&json!([
        {"ID": 1, "Lat": 45.5163147, "Lng": 25.3684474, "Title": "Bran Castle", "Categories": ["Museum"]},
        {"ID": 2, "Lat": -33.955016, "Lng": 18.424874, "Title": "Kirstenbosch", "Categories": ["Restaurant"]},
    ]))
    .unwrap()
}

fn widget() -> Locator<RecordingSurface> {
    Locator::new(RecordingSurface::new(), WidgetOptions::default())
}

/// Loading a location list fits the view to the markers and pans to the
/// biased center, markers first.
#[test]
fn test_load_fits_then_pans() {
    let mut locator = widget();
    locator.view_mut().surface_mut().clear();

    locator.load_locations(sample_locations());

    let calls = &locator.view().surface().calls;
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], SurfaceCall::SetMarkers(_)));

    let SurfaceCall::FitBounds(bounds) = &calls[1] else {
        panic!("expected a fit after the markers");
    };
    assert_eq!(bounds.north_east, LatLng::new(45.5163147, 25.3684474));
    assert_eq!(bounds.south_west, LatLng::new(-33.955016, 18.424874));

    let SurfaceCall::PanTo(center) = &calls[2] else {
        panic!("expected the final pan");
    };
    assert!((center.lat - 7.62).abs() < 0.01);
}

/// With no locations at all the box is degenerate: no fit, only a pan to
/// the configured default center.
#[test]
fn test_initial_sync_pans_to_default_center() {
    let options = WidgetOptions::default().with_default_center(LatLng::new(51.0, 9.0));
    let locator = Locator::new(RecordingSurface::new(), options);

    let surface = locator.view().surface();
    assert_eq!(surface.fit_count(), 0);
    // zero span at a point box leaves the bias inert
    assert_eq!(surface.last_pan(), Some(LatLng::new(51.0, 9.0)));
}

/// A marker click opens the marker and pins the camera to it; the original
/// container dispatches both in one handler.
#[test]
fn test_marker_click_opens_and_recenters() {
    let mut locator = widget();
    locator.load_locations(sample_locations());
    locator.view_mut().surface_mut().clear();

    locator.handle_marker_click("2");

    assert_eq!(locator.state().map.open.as_deref(), Some("2"));
    let surface = locator.view().surface();
    assert_eq!(
        surface.last_pan(),
        Some(LatLng::new(-33.955016, 18.424874))
    );
    // the explicit center suppresses fitting entirely
    let markers = surface.markers().unwrap();
    assert!(markers.iter().find(|m| m.key == "2").unwrap().is_open);
}

/// Closing the info panel returns the store to idle and no descriptor
/// stays marked open.
#[test]
fn test_close_returns_to_idle() {
    let mut locator = widget();
    locator.load_locations(sample_locations());
    locator.handle_marker_click("1");

    locator.handle_marker_close();

    assert_eq!(locator.state().map.open, None);
    let markers = locator.view().surface().markers().unwrap();
    assert!(markers.iter().all(|m| !m.is_open));
}

/// While a search is active only the top three results shape the box, but
/// the search origin is always included and the pin is appended.
#[test]
fn test_search_bounds_and_pin() {
    let options = WidgetOptions::default().with_search_marker_icon("/img/search.png");
    let mut locator = Locator::new(RecordingSurface::new(), options);

    let origin = LatLng::new(10.0, 10.0);
    locator.submit_search(
        SearchFilter {
            address: "somewhere".to_string(),
            radius: 25,
            category: String::new(),
        },
        Some(origin),
    );
    locator.load_locations(
        decode_locations(&json!([
            {"ID": 1, "Lat": 1.0, "Lng": 1.0},
            {"ID": 2, "Lat": 2.0, "Lng": 2.0},
            {"ID": 3, "Lat": 3.0, "Lng": 3.0},
            {"ID": 4, "Lat": 50.0, "Lng": 50.0},
        ]))
        .unwrap(),
    );

    let surface = locator.view().surface();
    let fitted = surface
        .calls
        .iter()
        .rev()
        .find_map(|call| match call {
            SurfaceCall::FitBounds(bounds) => Some(bounds.clone()),
            _ => None,
        })
        .unwrap();

    // first three results plus the origin, not the far outlier
    assert_eq!(fitted.north_east, LatLng::new(10.0, 10.0));
    assert_eq!(fitted.south_west, LatLng::new(1.0, 1.0));
    assert!(!fitted.contains(&LatLng::new(50.0, 50.0)));

    let markers = surface.markers().unwrap();
    assert_eq!(markers.len(), 5);
    let pin = markers.last().unwrap();
    assert_eq!(pin.key, "search");
    assert!(!pin.clickable);
}

/// Replacing the list while a marker is open degrades gracefully: the
/// stale id highlights nothing and nothing errors.
#[test]
fn test_stale_open_marker_highlights_nothing() {
    let mut locator = widget();
    locator.load_locations(sample_locations());
    locator.handle_marker_click("1");

    locator.load_locations(
        decode_locations(&json!([{"ID": 99, "Lat": 5.0, "Lng": 5.0}])).unwrap(),
    );

    assert_eq!(locator.state().map.open.as_deref(), Some("1"));
    let markers = locator.view().surface().markers().unwrap();
    assert!(markers.iter().all(|m| !m.is_open));
}

/// The filter seeded from the page URL drives search mode from the first
/// sync on.
#[test]
fn test_seeding_from_url() {
    let url = Url::parse("https://example.org/find?Address=10115+Berlin&Radius=25").unwrap();
    let locator = Locator::from_url(RecordingSurface::new(), WidgetOptions::default(), &url);

    assert_eq!(locator.state().search.address, "10115 Berlin");
    assert_eq!(locator.state().search.radius, 25);
    assert!(locator.state().search_active());
}

/// List rows mirror the locations and carry distances once a search origin
/// exists.
#[test]
fn test_list_entries_follow_state() {
    let mut locator = widget();
    locator.load_locations(sample_locations());
    locator.handle_marker_click("1");

    let entries = locator.list_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Bran Castle");
    assert!(entries[0].is_current);
    assert!(entries[0].distance.is_none());

    locator.dispatch(Action::SetSearchOrigin(Some(LatLng::new(
        45.5163147,
        25.3684474,
    ))));
    let entries = locator.list_entries();
    assert_eq!(entries[0].distance.as_deref(), Some("0.0 km"));
    assert!(entries[1].distance.as_deref().unwrap().ends_with(" km"));
}

/// A fresh search releases a pinned center so the next result set is
/// fitted again instead of panned.
#[test]
fn test_search_releases_pinned_center() {
    let mut locator = widget();
    locator.load_locations(sample_locations());
    locator.handle_marker_click("1");
    assert!(locator.state().map.center.is_some());

    locator.submit_search(
        SearchFilter {
            address: "elsewhere".to_string(),
            radius: -1,
            category: String::new(),
        },
        None,
    );
    assert_eq!(locator.state().map.center, None);

    locator.view_mut().surface_mut().clear();
    locator.load_locations(
        decode_locations(&json!([
            {"ID": 7, "Lat": 40.0, "Lng": -3.0},
            {"ID": 8, "Lat": 41.0, "Lng": -2.0},
        ]))
        .unwrap(),
    );
    assert_eq!(locator.view().surface().fit_count(), 1);
}
