//! Query parameter decoding
//!
//! Turns the raw query string map into typed parameters, collecting every
//! offending field instead of stopping at the first one.

use crate::constants::geo::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::constants::limit::{MAX_LIMIT, MIN_LIMIT};
use crate::error::status_name;
use std::collections::HashMap;
use std::fmt;

/// A single rejected parameter
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Location of the field, e.g. `["query", "limit"]`
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldError {
    fn query(field: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["query".to_string(), field.to_string()],
            msg: msg.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join(" -> "), self.msg)
    }
}

/// All parameter errors of one request
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub const STATUS: u16 = 422;

    /// `Error 422 Unprocessable Content: <field>: <msg>; ...`
    pub fn detail(&self) -> String {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        format!(
            "Error {} {}: {}",
            Self::STATUS,
            status_name(Self::STATUS),
            messages.join("; ")
        )
    }
}

/// Parameters of `GET /api/geocode/search`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub q: String,
    pub limit: u32,
}

/// Parameters of `GET /api/geocode/reverse`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseParams {
    pub lat: f64,
    pub lon: f64,
}

impl SearchParams {
    /// Decode `q` (required) and `limit` (optional, 1..=50)
    pub fn decode(
        raw: &HashMap<String, String>,
        default_limit: u32,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();

        let q = required(raw, "q", &mut errors).map(str::to_string);

        let limit = match raw.get("limit") {
            None => Some(default_limit),
            Some(value) => parse_int(value, "limit", MIN_LIMIT as i64, MAX_LIMIT as i64, &mut errors)
                .map(|v| v as u32),
        };

        match (q, limit) {
            (Some(q), Some(limit)) if errors.is_empty() => Ok(Self { q, limit }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

impl ReverseParams {
    /// Decode `lat` (-90..90) and `lon` (-180..180), both required
    pub fn decode(raw: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();

        let lat = required(raw, "lat", &mut errors)
            .and_then(|v| parse_float(v, "lat", MIN_LATITUDE, MAX_LATITUDE, &mut errors));
        let lon = required(raw, "lon", &mut errors)
            .and_then(|v| parse_float(v, "lon", MIN_LONGITUDE, MAX_LONGITUDE, &mut errors));

        match (lat, lon) {
            (Some(lat), Some(lon)) if errors.is_empty() => Ok(Self { lat, lon }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

fn required<'a>(
    raw: &'a HashMap<String, String>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    let value = raw.get(field).map(String::as_str);
    if value.is_none() {
        errors.push(FieldError::query(field, "Field required"));
    }
    value
}

fn parse_int(
    value: &str,
    field: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    let Ok(parsed) = value.trim().parse::<i64>() else {
        errors.push(FieldError::query(
            field,
            "Input should be a valid integer, unable to parse string as an integer",
        ));
        return None;
    };

    check_bounds(parsed, field, min, max, errors)
}

fn parse_float(
    value: &str,
    field: &str,
    min: f64,
    max: f64,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let parsed = match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        Ok(_) => {
            errors.push(FieldError::query(field, "Input should be a finite number"));
            return None;
        }
        Err(_) => {
            errors.push(FieldError::query(
                field,
                "Input should be a valid number, unable to parse string as a number",
            ));
            return None;
        }
    };

    check_bounds(parsed, field, min, max, errors)
}

fn check_bounds<T: PartialOrd + fmt::Display>(
    value: T,
    field: &str,
    min: T,
    max: T,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    if value < min {
        errors.push(FieldError::query(
            field,
            format!("Input should be greater than or equal to {}", min),
        ));
        return None;
    }
    if value > max {
        errors.push(FieldError::query(
            field,
            format!("Input should be less than or equal to {}", max),
        ));
        return None;
    }
    Some(value)
}
