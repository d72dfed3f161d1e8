//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::{Address, ReverseResult, SearchResult};

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format_search(&self, result: &SearchResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "{} result(s) for \"{}\"\n",
            result.total, result.query
        ));

        for (i, location) in result.results.iter().enumerate() {
            output.push_str(&format!("\n{}. {}\n", i + 1, location.display_name));
            output.push_str(&format!("   Coordinates: {}, {}\n", location.lat, location.lon));
            if let (Some(class), Some(kind)) = (&location.class_type, &location.place_type) {
                output.push_str(&format!("   Kind: {}/{}\n", class, kind));
            }
            if let Some(importance) = location.importance {
                output.push_str(&format!("   Importance: {:.3}\n", importance));
            }
            if let Some(address) = &location.address {
                push_address(&mut output, address);
            }
        }

        Ok(output)
    }

    fn format_reverse(&self, result: &ReverseResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Input: ({}, {})\n",
            result.lat_input, result.lon_input
        ));
        output.push_str(&format!("Place: {}\n", result.display_name));
        output.push_str(&format!("   Coordinates: {}, {}\n", result.lat, result.lon));
        if let (Some(osm_type), Some(osm_id)) = (&result.osm_type, result.osm_id) {
            output.push_str(&format!("   OSM: {} {}\n", osm_type, osm_id));
        }
        if let Some(address) = &result.address {
            push_address(&mut output, address);
        }

        Ok(output)
    }
}

fn push_address(output: &mut String, address: &Address) {
    let street = [address.house_number.as_deref(), address.road.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let parts = [
        Some(street.as_str()).filter(|s| !s.is_empty()),
        address.neighbourhood.as_deref(),
        address.city.as_deref(),
        address.state.as_deref(),
        address.postcode.as_deref(),
        address.country.as_deref(),
    ];

    let line = parts.into_iter().flatten().collect::<Vec<_>>().join(", ");
    if !line.is_empty() {
        output.push_str(&format!("   Address: {}\n", line));
    }
}
