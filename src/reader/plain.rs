//! Plain-text reader.

use super::DocumentReader;
use crate::detect::DocumentFormat;
use crate::error::Result;

/// Reader for plain UTF-8 text documents.
///
/// The bytes are decoded as-is; invalid UTF-8 is a [`crate::Error::Decode`].
pub struct PlainTextReader;

impl PlainTextReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PlainTextReader {
    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Plain]
    }

    fn name(&self) -> &str {
        "plain"
    }

    fn read(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)?;
        Ok(text.to_string())
    }
}
