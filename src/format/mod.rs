//! Output formatters
//!
//! Provides trait-based output formatting for lookup results printed by the CLI.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::geo::{ReverseResult, SearchResult};
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a forward search result
    fn format_search(&self, result: &SearchResult) -> Result<String>;

    /// Format a reverse lookup result
    fn format_reverse(&self, result: &ReverseResult) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    [
        Box::new(json::JsonFormatter) as Box<dyn OutputFormatter>,
        Box::new(text::TextFormatter),
    ]
    .iter()
    .map(|f| FormatInfo {
        name: f.name().to_string(),
        description: f.description().to_string(),
    })
    .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::geo::models::{Location, RawPlace, ReverseResult, SearchResult};
    use crate::geo::stub::place;

    pub fn search_result() -> SearchResult {
        let results: Vec<Location> = [place(1, "First Place"), place(2, "Second Place")]
            .into_iter()
            .map(|v| Location::from_raw(serde_json::from_value::<RawPlace>(v).unwrap()).unwrap())
            .collect();
        SearchResult {
            total: results.len(),
            results,
            query: "place".to_string(),
        }
    }

    pub fn reverse_result() -> ReverseResult {
        let raw: RawPlace = serde_json::from_value(place(3, "Googleplex")).unwrap();
        ReverseResult::from_raw(raw, 37.4224764, -122.0842499).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        assert!(formats.iter().any(|f| f.name == "json"));
        assert!(formats.iter().any(|f| f.name == "text"));
    }
}
