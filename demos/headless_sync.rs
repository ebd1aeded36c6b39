//! Drives the widget against the recording surface and prints every call
//! the maps provider would have received.
//!
//! Run with: cargo run --example headless_sync

use anyhow::Result;
use locfinder::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    env_logger::init();

    let options = WidgetOptions::new()
        .with_default_center(LatLng::new(52.52, 13.405))
        .with_marker_icon("/img/pin.png")
        .with_search_marker_icon("/img/search-pin.png");
    let mut locator = Locator::new(RecordingSurface::new(), options);

    let locations = decode_locations(&json!([
        {"ID": 1, "Lat": 52.5200, "Lng": 13.4050, "Title": "Mitte", "Categories": ["Cafe"]},
        {"ID": 2, "Lat": 52.4862, "Lng": 13.3777, "Title": "Schoeneberg", "Categories": ["Restaurant"]},
        {"ID": 3, "Lat": 52.5413, "Lng": 13.3500, "Title": "Wedding", "Categories": ["Bar"]},
    ]))?;
    locator.load_locations(locations);

    locator.submit_search(
        SearchFilter {
            address: "10115 Berlin".to_string(),
            radius: 25,
            category: String::new(),
        },
        Some(LatLng::new(52.5323, 13.3846)),
    );

    locator.handle_marker_click("2");
    locator.handle_marker_close();

    println!("list panel:");
    for entry in locator.list_entries() {
        println!(
            "  [{}] {} {}",
            entry.key,
            entry.title,
            entry.distance.as_deref().unwrap_or("-")
        );
    }

    println!("surface calls:");
    for call in &locator.view().surface().calls {
        match call {
            SurfaceCall::SetMarkers(markers) => println!("  set_markers ({})", markers.len()),
            SurfaceCall::PanTo(center) => println!("  pan_to ({:.4}, {:.4})", center.lat, center.lng),
            SurfaceCall::FitBounds(bounds) => println!(
                "  fit_bounds (sw {:.4},{:.4} ne {:.4},{:.4})",
                bounds.south_west.lat,
                bounds.south_west.lng,
                bounds.north_east.lat,
                bounds.north_east.lng
            ),
        }
    }

    Ok(())
}
