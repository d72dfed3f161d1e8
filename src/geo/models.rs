//! Geocoding records
//!
//! `RawPlace`/`RawAddress` mirror the provider's JSON with every field
//! optional. The address sub-object is kept as a raw JSON map until mapping,
//! so any non-empty object is embedded even if it has none of the known keys.
//! `Location`, `Address`, `SearchResult` and `ReverseResult` are the shapes
//! returned to callers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Place record as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlace {
    pub place_id: Option<i64>,
    pub licence: Option<String>,
    pub osm_type: Option<String>,
    pub osm_id: Option<i64>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "class")]
    pub class_type: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub importance: Option<f64>,
    pub address: Option<Map<String, Value>>,
}

/// Address sub-object as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

/// Structured address; absent components were not supplied by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbourhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// A single geocoded place
///
/// `lat`/`lon` stay strings so the provider's precision is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub place_id: i64,
    pub licence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(alias = "class", skip_serializing_if = "Option::is_none")]
    pub class_type: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
    /// Provider ranking score (0-1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Forward geocoding response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Places in the provider's ranking order
    pub results: Vec<Location>,
    /// Always `results.len()`
    pub total: usize,
    /// Trimmed query that produced the results
    pub query: String,
}

/// Reverse geocoding response
///
/// Carries the caller's coordinates alongside the provider's own `lat`/`lon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseResult {
    pub place_id: i64,
    pub licence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(alias = "class", skip_serializing_if = "Option::is_none")]
    pub class_type: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub lat_input: f64,
    pub lon_input: f64,
}

impl From<RawAddress> for Address {
    fn from(raw: RawAddress) -> Self {
        Self {
            house_number: raw.house_number,
            road: raw.road,
            neighbourhood: raw.neighbourhood,
            city: raw.city,
            state: raw.state,
            postcode: raw.postcode,
            country: raw.country,
            country_code: raw.country_code,
        }
    }
}

/// Fields every provider record must carry
struct Required {
    place_id: i64,
    lat: String,
    lon: String,
    display_name: String,
}

fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        Error::UpstreamContract(format!("place record is missing required field `{}`", field))
    })
}

impl RawPlace {
    fn take_required(&mut self) -> Result<Required> {
        Ok(Required {
            place_id: require(self.place_id.take(), "place_id")?,
            lat: require(self.lat.take(), "lat")?,
            lon: require(self.lon.take(), "lon")?,
            display_name: require(self.display_name.take(), "display_name")?,
        })
    }

    /// Embed an address only when the provider sent a non-empty object
    fn take_address(&mut self) -> Result<Option<Address>> {
        let Some(map) = self.address.take().filter(|map| !map.is_empty()) else {
            return Ok(None);
        };

        let raw: RawAddress = serde_json::from_value(Value::Object(map))
            .map_err(|e| Error::UpstreamContract(format!("invalid address object: {}", e)))?;
        Ok(Some(Address::from(raw)))
    }
}

impl Location {
    /// Map a provider record, failing with `UpstreamContract` if a required field is absent
    pub fn from_raw(mut raw: RawPlace) -> Result<Self> {
        let required = raw.take_required()?;
        let address = raw.take_address()?;

        Ok(Self {
            place_id: required.place_id,
            licence: raw.licence.unwrap_or_default(),
            osm_type: raw.osm_type,
            osm_id: raw.osm_id,
            lat: required.lat,
            lon: required.lon,
            display_name: required.display_name,
            class_type: raw.class_type,
            place_type: raw.place_type,
            importance: raw.importance,
            address,
        })
    }
}

impl ReverseResult {
    /// Map a provider record and attach the caller's coordinates
    pub fn from_raw(mut raw: RawPlace, lat_input: f64, lon_input: f64) -> Result<Self> {
        let required = raw.take_required()?;
        let address = raw.take_address()?;

        Ok(Self {
            place_id: required.place_id,
            licence: raw.licence.unwrap_or_default(),
            osm_type: raw.osm_type,
            osm_id: raw.osm_id,
            lat: required.lat,
            lon: required.lon,
            display_name: required.display_name,
            class_type: raw.class_type,
            place_type: raw.place_type,
            address,
            lat_input,
            lon_input,
        })
    }
}
