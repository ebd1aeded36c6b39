//! URL query persistence for the search filter.
//!
//! The filter is seeded from the page URL once at startup and written back
//! when a search is submitted. The wire keys are the capitalized ones the
//! original page used (`Address`, `Radius`, `Category`); lowercase variants
//! are accepted on read. The `page` parameter belongs to pagination and is
//! never part of the filter.

use crate::core::constants::PAGE_QUERY_KEY;
use crate::store::state::SearchFilter;
use url::Url;

const ADDRESS_KEY: &str = "Address";
const RADIUS_KEY: &str = "Radius";
const CATEGORY_KEY: &str = "Category";

impl SearchFilter {
    /// Seeds a filter from a page URL. Missing or garbled parameters fall
    /// back to the defaults.
    pub fn from_url(url: &Url) -> Self {
        let mut filter = SearchFilter::default();

        for (key, value) in url.query_pairs() {
            if key.eq_ignore_ascii_case(PAGE_QUERY_KEY) {
                continue;
            }
            if key == ADDRESS_KEY || (key == "address" && filter.address.is_empty()) {
                filter.address = value.into_owned();
            } else if key == RADIUS_KEY || (key == "radius" && filter.radius == -1) {
                filter.radius = value.parse().unwrap_or(-1);
            } else if key == CATEGORY_KEY || (key == "category" && filter.category.is_empty()) {
                filter.category = value.into_owned();
            }
        }

        log::debug!(
            "seeded filter from url: address={:?} radius={} category={:?}",
            filter.address,
            filter.radius,
            filter.category
        );
        filter
    }

    /// Writes the filter back into a URL's query, replacing previous filter
    /// parameters and preserving everything unrelated.
    pub fn apply_to_url(&self, url: &mut Url) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| {
                !key.eq_ignore_ascii_case(ADDRESS_KEY)
                    && !key.eq_ignore_ascii_case(RADIUS_KEY)
                    && !key.eq_ignore_ascii_case(CATEGORY_KEY)
            })
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        if !self.address.is_empty() {
            pairs.append_pair(ADDRESS_KEY, &self.address);
        }
        if self.radius != -1 {
            pairs.append_pair(RADIUS_KEY, &self.radius.to_string());
        }
        if !self.category.is_empty() {
            pairs.append_pair(CATEGORY_KEY, &self.category);
        }
        drop(pairs);

        if url.query() == Some("") {
            url.set_query(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_query() {
        let url =
            Url::parse("https://example.org/find?Address=10115+Berlin&Radius=25&Category=Cafe")
                .unwrap();
        let filter = SearchFilter::from_url(&url);

        assert_eq!(filter.address, "10115 Berlin");
        assert_eq!(filter.radius, 25);
        assert_eq!(filter.category, "Cafe");
    }

    #[test]
    fn test_missing_parameters_default() {
        let url = Url::parse("https://example.org/find").unwrap();
        let filter = SearchFilter::from_url(&url);

        assert_eq!(filter, SearchFilter::default());
    }

    #[test]
    fn test_page_parameter_is_ignored() {
        let url = Url::parse("https://example.org/find?page=3&Address=Bonn").unwrap();
        let filter = SearchFilter::from_url(&url);

        assert_eq!(filter.address, "Bonn");
        assert_eq!(filter.radius, -1);
    }

    #[test]
    fn test_garbled_radius_defaults() {
        let url = Url::parse("https://example.org/find?Radius=lots").unwrap();
        assert_eq!(SearchFilter::from_url(&url).radius, -1);
    }

    #[test]
    fn test_lowercase_keys_accepted() {
        let url = Url::parse("https://example.org/find?address=Bonn&radius=10").unwrap();
        let filter = SearchFilter::from_url(&url);

        assert_eq!(filter.address, "Bonn");
        assert_eq!(filter.radius, 10);
    }

    #[test]
    fn test_write_back_preserves_unrelated_parameters() {
        let mut url = Url::parse("https://example.org/find?page=2&theme=dark").unwrap();
        let filter = SearchFilter {
            address: "10115 Berlin".to_string(),
            radius: 25,
            category: String::new(),
        };
        filter.apply_to_url(&mut url);

        let seeded = SearchFilter::from_url(&url);
        assert_eq!(seeded.address, "10115 Berlin");
        assert_eq!(seeded.radius, 25);
        assert!(url.query().unwrap().contains("theme=dark"));
        assert!(url.query().unwrap().contains("page=2"));
    }

    #[test]
    fn test_round_trip() {
        let filter = SearchFilter {
            address: "Hamburg".to_string(),
            radius: 50,
            category: "Restaurant".to_string(),
        };
        let mut url = Url::parse("https://example.org/find").unwrap();
        filter.apply_to_url(&mut url);

        assert_eq!(SearchFilter::from_url(&url), filter);
    }

    #[test]
    fn test_default_filter_clears_query() {
        let mut url = Url::parse("https://example.org/find?Address=Bonn").unwrap();
        SearchFilter::default().apply_to_url(&mut url);

        assert_eq!(url.query(), None);
    }
}
