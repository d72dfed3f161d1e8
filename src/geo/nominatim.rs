//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Nominatim's usage policy requires an identifying User-Agent; the client
//! sends the configured one with every request.

use crate::config::UpstreamConfig;
use crate::constants::api::DETAIL_FLAGS;
use crate::error::{Error, Result};
use crate::geo::models::RawPlace;
use crate::geo::GeoBackend;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a client from the upstream settings
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Provider base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Nominatim returned status {}", status);
            return Err(upstream_error(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

impl GeoBackend for NominatimClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<RawPlace>> {
        let url = format!(
            "{}/search?q={}&limit={}&{}",
            self.base_url,
            urlencoding::encode(query),
            limit,
            DETAIL_FLAGS
        );

        parse_search_body(self.get_json(&url).await?)
    }

    async fn reverse(&self, lat: f64, lon: f64) -> Result<RawPlace> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&{}",
            self.base_url, lat, lon, DETAIL_FLAGS
        );

        parse_reverse_body(self.get_json(&url).await?, lat, lon)
    }
}

/// Reason phrase and explanation for a provider status code
pub fn status_reason(status: u16) -> (String, String) {
    let (name, reason) = match status {
        400 => ("Bad Request", "Invalid or missing parameters"),
        403 => ("Forbidden", "User-Agent required or access denied"),
        404 => ("Not Found", "Resource not found"),
        429 => ("Too Many Requests", "Rate limit exceeded. Please try again later"),
        500 => ("Internal Server Error", "Provider internal error"),
        503 => ("Service Unavailable", "Service temporarily unavailable"),
        other => return (format!("HTTP {}", other), format!("HTTP error {}", other)),
    };
    (name.to_string(), reason.to_string())
}

/// Error for a non-success provider status
pub fn upstream_error(status: u16) -> Error {
    Error::Upstream {
        status,
        reason: status_reason(status).1,
    }
}

/// Interpret a search response body
///
/// Anything but a JSON array means the provider changed its contract.
pub fn parse_search_body(body: Value) -> Result<Vec<RawPlace>> {
    if !body.is_array() {
        return Err(Error::UpstreamContract(
            "search response is not a list".to_string(),
        ));
    }

    serde_json::from_value(body).map_err(|e| Error::UpstreamContract(e.to_string()))
}

/// Interpret a reverse response body
///
/// Nominatim reports "nothing here" as `{"error": ...}` with status 200.
pub fn parse_reverse_body(body: Value, lat: f64, lon: f64) -> Result<RawPlace> {
    if body.get("error").is_some() {
        return Err(Error::NotFound(format!(
            "No address found for coordinates ({}, {})",
            lat, lon
        )));
    }

    if !body.is_object() {
        return Err(Error::UpstreamContract(
            "reverse response is not an object".to_string(),
        ));
    }

    serde_json::from_value(body).map_err(|e| Error::UpstreamContract(e.to_string()))
}
