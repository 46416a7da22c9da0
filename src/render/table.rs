//! Plain-text word-count table.

use crate::analyze::Analysis;

/// Render the top `limit` word counts as an aligned two-column table.
///
/// Returns an empty string for an empty analysis.
pub fn to_table(analysis: &Analysis, limit: usize) -> String {
    let rows = analysis.top(limit);
    if rows.is_empty() {
        return String::new();
    }

    let word_width = rows
        .iter()
        .map(|wc| wc.word.chars().count())
        .chain(std::iter::once("Word".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<word_width$}  Count\n", "Word"));
    out.push_str(&format!("{:-<word_width$}  -----\n", ""));
    for wc in rows {
        out.push_str(&format!("{:<word_width$}  {}\n", wc.word, wc.count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Analyzer, StopwordSet};

    #[test]
    fn test_table_layout() {
        let analysis = Analyzer::new()
            .with_stopwords(StopwordSet::empty())
            .analyze_text("longword longword b");
        let table = to_table(&analysis, 10);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Word      Count");
        assert_eq!(lines[2], "longword  2");
        assert_eq!(lines[3], "b         1");
    }

    #[test]
    fn test_table_respects_limit() {
        let analysis = Analyzer::new()
            .with_stopwords(StopwordSet::empty())
            .analyze_text("a a b c");
        let table = to_table(&analysis, 1);
        // Header, separator, one row.
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_empty_analysis_renders_empty() {
        let analysis = Analyzer::new().analyze_text("");
        assert_eq!(to_table(&analysis, 20), "");
    }
}
