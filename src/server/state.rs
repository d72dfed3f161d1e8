//! Server shared state
//!
//! Holds configuration and the geocoding service. Nothing in here is mutated
//! after startup, so requests share it without locking.

use crate::config::Config;
use crate::error::Result;
use crate::geo::{GeoBackend, GeocodeService, NominatimClient};

/// Shared state for the HTTP server
pub struct AppState<B> {
    /// Configuration
    pub config: Config,

    /// Geocoding service
    pub service: GeocodeService<B>,
}

impl AppState<NominatimClient> {
    /// Create state backed by the configured Nominatim instance
    pub fn new(config: Config) -> Result<Self> {
        let client = NominatimClient::new(&config.upstream)?;
        Ok(Self::with_backend(config, client))
    }
}

impl<B: GeoBackend> AppState<B> {
    /// Create state around an arbitrary backend
    pub fn with_backend(config: Config, backend: B) -> Self {
        Self {
            config,
            service: GeocodeService::new(backend),
        }
    }

    /// Search limit used when the caller omits `limit`
    pub fn default_limit(&self) -> u32 {
        self.config.defaults.limit
    }
}
