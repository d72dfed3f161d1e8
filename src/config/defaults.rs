//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::NOMINATIM_URL;

/// Default provider base URL
pub const DEFAULT_BASE_URL: &str = NOMINATIM_URL;

/// Default User-Agent sent to the provider (required by its usage policy)
pub const DEFAULT_USER_AGENT: &str = "GeocodingApp/1.0";

/// Default timeout for every outbound call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of search results
pub const DEFAULT_LIMIT: u32 = 10;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8000;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geocode-gateway";

/// Environment variables that override file values
pub mod env {
    pub const BASE_URL: &str = "NOMINATIM_API_BASE_URL";
    pub const USER_AGENT: &str = "NOMINATIM_USER_AGENT";
    pub const TIMEOUT_SECS: &str = "NOMINATIM_TIMEOUT_SECS";
    pub const DEFAULT_LIMIT: &str = "GEOCODE_DEFAULT_LIMIT";
    pub const HOST: &str = "GEOCODE_HOST";
    pub const PORT: &str = "GEOCODE_PORT";
}
