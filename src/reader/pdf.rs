//! PDF reader backed by lopdf.

use super::DocumentReader;
use crate::detect::DocumentFormat;
use crate::error::Result;

/// Reader for paginated PDF documents.
///
/// Pages are processed in page order and their text concatenated with
/// single-space separators. A page with no extractable text (scanned or
/// image-only pages, or a page the extractor cannot handle) contributes an
/// empty string instead of failing the whole document; only a document
/// that cannot be loaded at all is an error.
pub struct PdfReader;

impl PdfReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdfReader {
    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Pdf]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn read(&self, bytes: &[u8]) -> Result<String> {
        let doc = lopdf::Document::load_mem(bytes)?;

        let pages: Vec<String> = doc
            .get_pages()
            .keys()
            .map(|&page_num| match doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("no extractable text on page {}: {}", page_num, e);
                    String::new()
                }
            })
            .collect();

        Ok(pages.join(" "))
    }
}
