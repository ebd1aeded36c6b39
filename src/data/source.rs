//! Data-source boundary: how location lists get into the widget.
//!
//! The store never fetches; a [`LocationSource`] is driven by the host and
//! its results enter the core as ordinary `LoadLocations` dispatches.

use crate::data::location::{decode_locations, Location};
use crate::store::state::SearchFilter;
use crate::Result;
use async_trait::async_trait;
use url::Url;

/// Supplies location lists matching a search filter.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn fetch(&self, filter: &SearchFilter) -> Result<Vec<Location>>;
}

/// Fetches locations from a JSON endpoint, passing the filter as query
/// parameters the same way the page URL carries them.
pub struct HttpLocationSource {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpLocationSource {
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl LocationSource for HttpLocationSource {
    async fn fetch(&self, filter: &SearchFilter) -> Result<Vec<Location>> {
        let mut url = self.endpoint.clone();
        filter.apply_to_url(&mut url);

        log::debug!("fetching locations from {url}");
        let payload: serde_json::Value = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let locations = decode_locations(&payload)?;
        log::info!("fetched {} locations", locations.len());
        Ok(locations)
    }
}
