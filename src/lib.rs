//! # textfreq
//!
//! Text extraction and word-frequency analysis for Rust.
//!
//! This library extracts plain text from documents (plain text, PDF,
//! DOCX), removes stopwords case-insensitively, and produces an ordered
//! word-frequency list, ready for word-cloud, chart, or table consumers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textfreq::{analyze_file, render, JsonFormat};
//!
//! fn main() -> textfreq::Result<()> {
//!     let analysis = analyze_file("document.pdf")?;
//!
//!     for wc in analysis.top(20) {
//!         println!("{}: {}", wc.word, wc.count);
//!     }
//!     println!("{}", render::to_json(&analysis, JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Document Reader**: bytes + declared format → plain text. Pages
//!   (PDF) and paragraphs (DOCX) are joined with single spaces; no
//!   structural metadata survives.
//! - **Stopword Filter**: whitespace tokens whose lowercase form is in the
//!   stopword set are dropped; casing and order of the rest are preserved.
//! - **Frequency Counter**: counts tokens case-sensitively, ordered by
//!   descending count with ties broken by first appearance.
//!
//! Parsing is delegated to `lopdf` (PDF) and `docx-rs` (DOCX) behind the
//! [`reader::DocumentReader`] trait, so alternative backends can be
//! registered without touching the pipeline.

pub mod analyze;
pub mod detect;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod reader;
pub mod render;
pub mod stopwords;

// Re-export commonly used types
pub use analyze::{Analysis, Analyzer};
pub use detect::{detect_format, detect_format_from_bytes, DocumentFormat};
pub use error::{Error, Result};
pub use filter::filter_stopwords;
pub use frequency::{count_words, WordCount};
pub use reader::{read_document, DocumentReader, ReaderRegistry};
pub use render::JsonFormat;
pub use stopwords::StopwordSet;

use std::path::Path;

/// Extract plain text from document bytes with a declared format.
///
/// # Example
///
/// ```
/// use textfreq::{extract_text, DocumentFormat};
///
/// let text = extract_text(b"hello world", DocumentFormat::Plain).unwrap();
/// assert_eq!(text, "hello world");
/// ```
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    reader::read_document(bytes, format)
}

/// Run the full pipeline on document bytes with a declared format, using
/// the built-in English stopword set.
pub fn analyze_bytes(bytes: &[u8], format: DocumentFormat) -> Result<Analysis> {
    Analyzer::new().analyze_bytes(bytes, format)
}

/// Run the full pipeline on a document file, detecting the format from
/// the extension with a magic-byte fallback.
///
/// # Example
///
/// ```no_run
/// use textfreq::analyze_file;
///
/// let analysis = analyze_file("report.docx").unwrap();
/// println!("{} distinct words", analysis.distinct_words());
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Analysis> {
    Analyzer::new().analyze_file(path)
}

/// Run filtering and counting on already-extracted text, using the
/// built-in English stopword set.
pub fn analyze_text(text: &str) -> Analysis {
    Analyzer::new().analyze_text(text)
}
