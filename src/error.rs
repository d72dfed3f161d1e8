//! Error types for geocode-gateway

use thiserror::Error;

/// Main error type for geocode-gateway operations
#[derive(Error, Debug)]
pub enum Error {
    /// Caller input rejected before any outbound call
    #[error("{0}")]
    InvalidInput(String),

    /// Provider has nothing for the query or coordinates
    #[error("{0}")]
    NotFound(String),

    /// Provider answered with a non-success status
    #[error("{reason}")]
    Upstream { status: u16, reason: String },

    /// Provider answered 200 but the payload breaks the documented contract
    #[error("Unexpected response from the geocoding provider: {0}")]
    UpstreamContract(String),

    #[error("Geocoding provider did not answer in time: {0}")]
    Timeout(String),

    #[error("Could not reach the geocoding provider: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else if err.is_decode() {
            Error::UpstreamContract(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl Error {
    /// HTTP status code this error is reported with
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidInput(_) => 400,
            Error::NotFound(_) => 404,
            Error::Upstream { status, .. } => *status,
            Error::Timeout(_) => 504,
            Error::Transport(_) => 502,
            Error::UpstreamContract(_)
            | Error::Config(_)
            | Error::Json(_)
            | Error::Server(_) => 500,
        }
    }

    /// Client-facing message: `Error <code> <name>: <reason>`
    pub fn detail(&self) -> String {
        let code = self.status_code();
        let name = match self {
            Error::Upstream { status, .. } => crate::geo::nominatim::status_reason(*status).0,
            _ => status_name(code),
        };
        format!("Error {} {}: {}", code, name, self)
    }
}

/// Canonical reason phrase for the status codes this gateway emits
pub fn status_name(code: u16) -> String {
    match code {
        400 => "Bad Request".to_string(),
        404 => "Not Found".to_string(),
        422 => "Unprocessable Content".to_string(),
        500 => "Internal Server Error".to_string(),
        502 => "Bad Gateway".to_string(),
        504 => "Gateway Timeout".to_string(),
        other => format!("HTTP {}", other),
    }
}

/// Result type alias for geocode-gateway operations
pub type Result<T> = std::result::Result<T, Error>;
