//! Geocoding service
//!
//! Validates caller input, calls the backend and reshapes its records into
//! the response types.

use crate::constants::geo::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::{Error, Result};
use crate::geo::models::{Location, ReverseResult, SearchResult};
use crate::geo::GeoBackend;
use tracing::{debug, info};

/// Transformation layer over a [`GeoBackend`]
#[derive(Debug, Clone)]
pub struct GeocodeService<B> {
    backend: B,
}

impl<B: GeoBackend> GeocodeService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Forward geocode `query`
    ///
    /// Fails with `InvalidInput` for a blank query (no outbound call) and
    /// `NotFound` when the provider has no match.
    pub async fn search(&self, query: &str, limit: u32) -> Result<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput(
                "Search query must not be empty".to_string(),
            ));
        }

        debug!("Searching for '{}' (limit {})", query, limit);
        let places = self.backend.search(query, limit).await?;

        if places.is_empty() {
            return Err(Error::NotFound(format!(
                "No locations found for '{}'",
                query
            )));
        }

        let results = places
            .into_iter()
            .map(Location::from_raw)
            .collect::<Result<Vec<_>>>()?;

        info!("Found {} location(s) for '{}'", results.len(), query);

        Ok(SearchResult {
            total: results.len(),
            results,
            query: query.to_string(),
        })
    }

    /// Reverse geocode a coordinate pair
    ///
    /// The returned record echoes `lat`/`lon` exactly as given.
    pub async fn reverse_lookup(&self, lat: f64, lon: f64) -> Result<ReverseResult> {
        validate_coordinates(lat, lon)?;

        debug!("Reverse lookup for ({}, {})", lat, lon);
        let place = self.backend.reverse(lat, lon).await?;
        let result = ReverseResult::from_raw(place, lat, lon)?;

        info!("Resolved ({}, {}) to '{}'", lat, lon, result.display_name);
        Ok(result)
    }
}

/// Validate that coordinates are within valid ranges
///
/// Latitude: -90 to 90
/// Longitude: -180 to 180
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(Error::InvalidInput(format!(
            "Latitude must be between {} and {}",
            MIN_LATITUDE, MAX_LATITUDE
        )));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(Error::InvalidInput(format!(
            "Longitude must be between {} and {}",
            MIN_LONGITUDE, MAX_LONGITUDE
        )));
    }
    Ok(())
}
