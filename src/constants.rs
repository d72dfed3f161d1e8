//! Centralized constants for the geocode-gateway crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;
}

/// External API endpoints and the query flags the provider expects
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Flags sent with every search and reverse request
    pub const DETAIL_FLAGS: &str = "format=json&addressdetails=1&extratags=1&namedetails=1";
}

/// Inbound HTTP surface
pub mod routes {
    /// Prefix shared by the geocoding endpoints
    pub const API_PREFIX: &str = "/api/geocode";
}

/// Search result limit bounds
pub mod limit {
    pub const MIN_LIMIT: u32 = 1;
    pub const MAX_LIMIT: u32 = 50;
}
