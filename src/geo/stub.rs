//! In-memory backend for tests
//!
//! Replies are stored as provider JSON (or a status code) and interpreted by
//! the same body parsers the Nominatim client uses.

use crate::error::Result;
use crate::geo::models::RawPlace;
use crate::geo::nominatim::{parse_reverse_body, parse_search_body, upstream_error};
use crate::geo::GeoBackend;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Canned provider reply: a body with status 200, or a bare error status
pub type Reply = std::result::Result<Value, u16>;

pub struct StubBackend {
    search_reply: Reply,
    reverse_reply: Reply,
    calls: AtomicUsize,
    last_search: Mutex<Option<(String, u32)>>,
}

impl StubBackend {
    pub fn new(search_reply: Reply, reverse_reply: Reply) -> Self {
        Self {
            search_reply,
            reverse_reply,
            calls: AtomicUsize::new(0),
            last_search: Mutex::new(None),
        }
    }

    pub fn searching(body: Value) -> Self {
        Self::new(Ok(body), Ok(json!({"error": "Unable to geocode"})))
    }

    pub fn reversing(body: Value) -> Self {
        Self::new(Ok(json!([])), Ok(body))
    }

    /// Number of outbound calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Query and limit of the most recent search
    pub fn last_search(&self) -> Option<(String, u32)> {
        self.last_search.lock().unwrap().clone()
    }
}

impl GeoBackend for StubBackend {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<RawPlace>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() = Some((query.to_string(), limit));

        match &self.search_reply {
            Ok(body) => parse_search_body(body.clone()),
            Err(status) => Err(upstream_error(*status)),
        }
    }

    async fn reverse(&self, lat: f64, lon: f64) -> Result<RawPlace> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reverse_reply {
            Ok(body) => parse_reverse_body(body.clone(), lat, lon),
            Err(status) => Err(upstream_error(*status)),
        }
    }
}

/// A well-formed provider record
pub fn place(id: i64, name: &str) -> Value {
    json!({
        "place_id": id,
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0. https://osm.org/copyright",
        "osm_type": "way",
        "osm_id": id * 10,
        "lat": "37.4224764",
        "lon": "-122.0842499",
        "display_name": name,
        "class": "place",
        "type": "house",
        "importance": 0.5,
        "address": {
            "house_number": "1600",
            "road": "Amphitheatre Parkway",
            "city": "Mountain View",
            "state": "California",
            "postcode": "94043",
            "country": "United States",
            "country_code": "us"
        }
    })
}
