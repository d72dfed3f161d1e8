//! Geocoding module
//!
//! Provides the upstream provider client, the records it returns, and the
//! service that validates input and reshapes provider payloads.

pub mod models;
pub mod nominatim;
pub mod service;

#[cfg(test)]
pub(crate) mod stub;

use crate::error::Result;
use models::RawPlace;

pub use models::{Address, Location, ReverseResult, SearchResult};
pub use nominatim::NominatimClient;
pub use service::GeocodeService;

/// Trait for geocoding backends
///
/// Implementations return the provider's records unmodified; validation and
/// mapping happen in [`GeocodeService`].
pub trait GeoBackend: Send + Sync {
    /// Forward search, in the provider's ranking order
    fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<RawPlace>>> + Send;

    /// Reverse lookup of a single coordinate pair
    fn reverse(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl std::future::Future<Output = Result<RawPlace>> + Send;
}
