//! Location records as delivered by the data source.
//!
//! The wire format is the JSON the locator backend serves: a list of
//! objects carrying `ID`, `Lat`, `Lng` and optionally `Categories`, either
//! as a plain array or wrapped GraphQL-style in `{"edges": [{"node": ...}]}`.
//! Records missing identity or coordinates are rejected here, at the
//! boundary; presentation code never sees them.

use crate::core::geo::LatLng;
use crate::{LocatorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A geocoded location in the result list. Immutable once loaded; the list
/// is replaced wholesale when new results arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub position: LatLng,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Remaining source fields (title, address, opening hours, ...) kept
    /// verbatim for list templates and info panels.
    #[serde(default)]
    pub info: Value,
}

impl Location {
    /// Decodes a single wire record.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| LocatorError::InvalidLocation(format!("not an object: {value}")))?;

        let id = match obj.get("ID") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(LocatorError::InvalidLocation(
                    "missing or empty ID".to_string(),
                ))
            }
        };

        let lat = obj.get("Lat").and_then(Value::as_f64);
        let lng = obj.get("Lng").and_then(Value::as_f64);
        let position = match (lat, lng) {
            (Some(lat), Some(lng)) => LatLng::from_raw(lat, lng).ok_or_else(|| {
                LocatorError::InvalidLocation(format!("location {id}: unusable coordinates"))
            })?,
            _ => {
                return Err(LocatorError::InvalidLocation(format!(
                    "location {id}: missing coordinates"
                )))
            }
        };

        let categories = obj
            .get("Categories")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(category_name).collect())
            .unwrap_or_default();

        let info: serde_json::Map<String, Value> = obj
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "ID" | "Lat" | "Lng" | "Categories"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            id,
            position,
            categories,
            info: Value::Object(info),
        })
    }

    /// Title for the list panel, falling back to the id.
    pub fn title(&self) -> &str {
        self.info
            .get("Title")
            .or_else(|| self.info.get("Name"))
            .and_then(Value::as_str)
            .unwrap_or(&self.id)
    }
}

/// Category entries come either as bare strings or as objects with a `Name`.
fn category_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(o) => o
            .get("Name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// Decodes a full result set, accepting both the plain array and the
/// `edges`/`node` wrapper.
pub fn decode_locations(value: &Value) -> Result<Vec<Location>> {
    let records: Vec<&Value> = if let Some(list) = value.as_array() {
        list.iter().collect()
    } else if let Some(edges) = value.get("edges").and_then(Value::as_array) {
        edges.iter().filter_map(|edge| edge.get("node")).collect()
    } else {
        return Err(LocatorError::InvalidLocation(
            "expected an array or an edges wrapper".to_string(),
        ));
    };

    let locations = records
        .into_iter()
        .map(Location::from_value)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("decoded {} locations", locations.len());
    Ok(locations)
}
