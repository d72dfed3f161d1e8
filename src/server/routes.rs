//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::constants::routes::API_PREFIX;
use crate::error::Error;
use crate::geo::{GeoBackend, ReverseResult, SearchResult};
use crate::server::params::{ReverseParams, SearchParams, ValidationErrors};
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router<B>(state: Arc<AppState<B>>) -> Router
where
    B: GeoBackend + 'static,
{
    Router::new()
        .route("/", get(home_handler))
        .route(&format!("{}/search", API_PREFIX), get(search_handler::<B>))
        .route(&format!("{}/reverse", API_PREFIX), get(reverse_handler::<B>))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
///
/// Serialized as `{"detail": "Error <code> <name>: <reason>"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: String,
    #[serde(skip)]
    pub status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = err.status_code();
        if status >= 500 {
            tracing::error!("{}", err);
        }
        ApiError {
            detail: err.detail(),
            status,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError {
            detail: errors.detail(),
            status: ValidationErrors::STATUS,
        }
    }
}

/// Welcome response
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub docs: String,
    pub version: String,
}

/// Liveness endpoint
///
/// GET /
async fn home_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Nominatim Geocoding API".to_string(),
        docs: format!(
            "See GET {0}/search?q=<text>&limit=<1-50> and GET {0}/reverse?lat=<lat>&lon=<lon>",
            API_PREFIX
        ),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Forward geocoding
///
/// GET /api/geocode/search?q=<text>&limit=<n>
async fn search_handler<B: GeoBackend>(
    State(state): State<Arc<AppState<B>>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<SearchResult>, ApiError> {
    let params = SearchParams::decode(&raw, state.default_limit())?;
    let result = state.service.search(&params.q, params.limit).await?;
    Ok(Json(result))
}

/// Reverse geocoding
///
/// GET /api/geocode/reverse?lat=<lat>&lon=<lon>
async fn reverse_handler<B: GeoBackend>(
    State(state): State<Arc<AppState<B>>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ReverseResult>, ApiError> {
    let params = ReverseParams::decode(&raw)?;
    let result = state.service.reverse_lookup(params.lat, params.lon).await?;
    Ok(Json(result))
}

async fn not_found_handler() -> ApiError {
    ApiError {
        detail: "Error 404 Not Found: No such endpoint".to_string(),
        status: 404,
    }
}
