//! geocode-gateway: HTTP gateway for Nominatim geocoding
//!
//! A library and CLI tool that forwards forward and reverse geocoding
//! requests to a Nominatim instance and reshapes its answers into a fixed
//! response schema.
//!
//! ## Features
//!
//! - `GET /api/geocode/search` and `GET /api/geocode/reverse`
//! - Explicit query parameter validation with per-field error reports
//! - Provider status codes mapped to `Error <code> <name>: <reason>` messages
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```no_run
//! use geocode_gateway::config::Config;
//! use geocode_gateway::geo::{GeocodeService, NominatimClient};
//!
//! # async fn demo() -> geocode_gateway::Result<()> {
//! let config = Config::default();
//! let service = GeocodeService::new(NominatimClient::new(&config.upstream)?);
//!
//! let found = service.search("1600 Amphitheatre Parkway", 1).await?;
//! println!("{} -> {}, {}", found.query, found.results[0].lat, found.results[0].lon);
//!
//! let place = service.reverse_lookup(37.4224764, -122.0842499).await?;
//! println!("{}", place.display_name);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{Address, GeocodeService, Location, ReverseResult, SearchResult};
