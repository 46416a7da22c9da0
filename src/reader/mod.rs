//! Document readers: format-specific text extraction behind a narrow trait.
//!
//! Each reader turns raw document bytes into a single plain-text string;
//! the registry dispatches on the declared [`DocumentFormat`] so the
//! analysis pipeline never names a concrete parsing library.
//!
//! # Example
//!
//! ```
//! use textfreq::reader::ReaderRegistry;
//! use textfreq::DocumentFormat;
//!
//! let registry = ReaderRegistry::with_defaults();
//! let text = registry.read(b"hello world", DocumentFormat::Plain).unwrap();
//! assert_eq!(text, "hello world");
//! ```

mod docx;
mod pdf;
mod plain;

pub use docx::DocxReader;
pub use pdf::PdfReader;
pub use plain::PlainTextReader;

use crate::detect::DocumentFormat;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for format-specific text extraction.
///
/// Implement this trait to add support for a new document format. All
/// structural metadata (pages, paragraphs) is discarded: the contract is
/// bytes in, one flat string out, with the format's addressable units
/// joined by single spaces.
pub trait DocumentReader: Send + Sync {
    /// The formats this reader handles.
    fn formats(&self) -> &[DocumentFormat];

    /// Human-readable reader name, for logging.
    fn name(&self) -> &str;

    /// Extract the document's plain-text content.
    fn read(&self, bytes: &[u8]) -> Result<String>;
}

/// Registry of document readers, dispatching on format tag.
pub struct ReaderRegistry {
    readers: HashMap<DocumentFormat, Arc<dyn DocumentReader>>,
}

impl ReaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in readers (plain, PDF, DOCX).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextReader::new()));
        registry.register(Arc::new(PdfReader::new()));
        registry.register(Arc::new(DocxReader::new()));
        registry
    }

    /// Register a reader for all formats it declares, replacing any
    /// previously registered reader for those formats.
    pub fn register(&mut self, reader: Arc<dyn DocumentReader>) {
        for format in reader.formats() {
            self.readers.insert(*format, Arc::clone(&reader));
        }
    }

    /// Look up the reader for a format.
    pub fn reader_for(&self, format: DocumentFormat) -> Option<&Arc<dyn DocumentReader>> {
        self.readers.get(&format)
    }

    /// Whether a reader is registered for the format.
    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.readers.contains_key(&format)
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    /// Whether the registry has no readers.
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// Extract text from `bytes` using the reader registered for `format`.
    ///
    /// Fails with [`Error::UnsupportedFormat`] when no reader is
    /// registered. Parsing failures are terminal; there is no retry.
    pub fn read(&self, bytes: &[u8], format: DocumentFormat) -> Result<String> {
        let reader = self
            .reader_for(format)
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;
        log::debug!("reading {} bytes with {} reader", bytes.len(), reader.name());
        reader.read(bytes)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Extract text from document bytes using the built-in readers.
pub fn read_document(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    ReaderRegistry::with_defaults().read(bytes, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_covers_all_formats() {
        let registry = ReaderRegistry::with_defaults();
        assert!(registry.supports(DocumentFormat::Plain));
        assert!(registry.supports(DocumentFormat::Pdf));
        assert!(registry.supports(DocumentFormat::Docx));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_empty_registry_reports_unsupported() {
        let registry = ReaderRegistry::new();
        assert!(registry.is_empty());
        let err = registry.read(b"text", DocumentFormat::Plain).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_read_document_plain() {
        let text = read_document("some words".as_bytes(), DocumentFormat::Plain).unwrap();
        assert_eq!(text, "some words");
    }
}
