//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::{ReverseResult, SearchResult};

/// JSON formatter - outputs the same body the HTTP API returns, pretty-printed
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format_search(&self, result: &SearchResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn format_reverse(&self, result: &ReverseResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::{reverse_result, search_result};

    #[test]
    fn test_json_search_format() {
        let output = JsonFormatter.format_search(&search_result()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["query"], "place");
        assert_eq!(parsed["results"][1]["place_id"], 2);
    }

    #[test]
    fn test_json_reverse_format() {
        let output = JsonFormatter.format_reverse(&reverse_result()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["lat_input"], 37.4224764);
        assert_eq!(parsed["display_name"], "Googleplex");
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
