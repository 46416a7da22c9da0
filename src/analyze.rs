//! The analysis pipeline: read → filter → count.

use crate::detect::{detect_format, DocumentFormat};
use crate::error::Result;
use crate::filter::filter_stopwords;
use crate::frequency::{count_words, WordCount};
use crate::reader::{DocumentReader, ReaderRegistry};
use crate::stopwords::StopwordSet;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Result of analyzing one document.
///
/// Holds the three pipeline products: the extracted text, the
/// stopword-filtered text, and the ordered word counts. Consumers doing
/// visualization (word clouds, charts, tables) read `filtered_text` and
/// `counts`; this crate renders neither images nor charts.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Declared or detected source format, if the read stage ran.
    pub format: Option<DocumentFormat>,
    /// The extracted text, structural units joined with single spaces.
    pub text: String,
    /// The extracted text with stopwords removed.
    pub filtered_text: String,
    /// Word counts ordered by descending count, ties by first appearance.
    pub counts: Vec<WordCount>,
}

impl Analysis {
    /// The top `n` entries (fewer if the document has fewer distinct words).
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.counts[..n.min(self.counts.len())]
    }

    /// Number of distinct words after filtering.
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Total token count after filtering.
    pub fn total_tokens(&self) -> usize {
        self.counts.iter().map(|wc| wc.count).sum()
    }

    /// Occurrence count for a word (case-sensitive), if present.
    pub fn count_of(&self, word: &str) -> Option<usize> {
        self.counts.iter().find(|wc| wc.word == word).map(|wc| wc.count)
    }
}

/// Builder for the analysis pipeline.
///
/// By default uses the shared built-in English stopword set and the
/// built-in readers for plain text, PDF, and DOCX.
///
/// # Example
///
/// ```
/// use textfreq::Analyzer;
///
/// let analysis = Analyzer::new()
///     .with_extra_stopwords(["lorem"])
///     .analyze_text("lorem ipsum dolor ipsum");
/// assert_eq!(analysis.counts[0].word, "ipsum");
/// ```
pub struct Analyzer {
    stopwords: Arc<StopwordSet>,
    registry: ReaderRegistry,
}

impl Analyzer {
    /// Create an analyzer with the default stopword set and readers.
    pub fn new() -> Self {
        Self {
            stopwords: StopwordSet::english(),
            registry: ReaderRegistry::with_defaults(),
        }
    }

    /// Replace the stopword set.
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }

    /// Add extra stopwords on top of the current set.
    pub fn with_extra_stopwords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = Arc::new(self.stopwords.with_extra(extra));
        self
    }

    /// Replace the reader registry.
    pub fn with_registry(mut self, registry: ReaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register an additional document reader.
    pub fn with_reader(mut self, reader: Arc<dyn DocumentReader>) -> Self {
        self.registry.register(reader);
        self
    }

    /// The stopword set this analyzer filters with.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Analyze document bytes with a declared format.
    pub fn analyze_bytes(&self, bytes: &[u8], format: DocumentFormat) -> Result<Analysis> {
        let text = self.registry.read(bytes, format)?;
        let mut analysis = self.analyze_text(&text);
        analysis.format = Some(format);
        Ok(analysis)
    }

    /// Analyze a document file, detecting the format from the extension
    /// with a magic-byte fallback.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<Analysis> {
        let bytes = std::fs::read(&path)?;
        let format = detect_format(&path, &bytes)?;
        self.analyze_bytes(&bytes, format)
    }

    /// Analyze already-extracted text, skipping the read stage.
    pub fn analyze_text(&self, text: &str) -> Analysis {
        let filtered_text = filter_stopwords(text, &self.stopwords);
        let counts = count_words(&filtered_text);
        log::debug!(
            "analyzed {} chars: {} distinct words",
            text.len(),
            counts.len()
        );
        Analysis {
            format: None,
            text: text.to_string(),
            filtered_text,
            counts,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
