//! JSON rendering of analysis results.

use crate::analyze::Analysis;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed with indentation.
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
}

/// Serialize an analysis to JSON.
pub fn to_json(analysis: &Analysis, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(analysis),
        JsonFormat::Compact => serde_json::to_string(analysis),
    };
    result.map_err(|e| Error::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Analyzer, StopwordSet};

    fn sample() -> Analysis {
        Analyzer::new()
            .with_stopwords(StopwordSet::new(["the"]))
            .analyze_text("the quick fox quick")
    }

    #[test]
    fn test_to_json_pretty_round_trips() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["filtered_text"], "quick fox quick");
        assert_eq!(value["counts"][0]["word"], "quick");
        assert_eq!(value["counts"][0]["count"], 2);
    }

    #[test]
    fn test_to_json_compact_is_single_line() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }
}
