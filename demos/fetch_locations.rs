//! Fetches a location list from a JSON endpoint and syncs the widget once.
//!
//! Run with:
//! cargo run --example fetch_locations --features tokio-runtime -- <endpoint-url>

use anyhow::{Context, Result};
use locfinder::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let endpoint = std::env::args()
        .nth(1)
        .context("usage: fetch_locations <endpoint-url>")?;

    let source = HttpLocationSource::new(&endpoint)?;
    let filter = SearchFilter::default();
    let locations = source.fetch(&filter).await?;
    println!("fetched {} locations", locations.len());

    let mut locator = Locator::new(RecordingSurface::new(), WidgetOptions::default());
    locator.load_locations(locations);

    for entry in locator.list_entries() {
        println!("  [{}] {}", entry.key, entry.title);
    }
    if let Some(center) = locator.view().surface().last_pan() {
        println!("camera: ({:.4}, {:.4})", center.lat, center.lng);
    }

    Ok(())
}
