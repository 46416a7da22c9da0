//! Document format detection and validation.

use crate::error::{Error, Result};
use std::path::Path;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Plain UTF-8 text.
    Plain,
    /// Paginated PDF document.
    Pdf,
    /// Paragraph-structured Office Open XML document.
    Docx,
}

impl DocumentFormat {
    /// Resolve a declared format tag (e.g., from an upload handler).
    ///
    /// Accepts the canonical tags `plain`, `pdf`, and `docx`, plus the
    /// common aliases `txt` and `text`. Any other tag is an
    /// [`Error::UnsupportedFormat`].
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "plain" | "txt" | "text" => Ok(Self::Plain),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// Resolve a format from a MIME type, as supplied by browser uploads.
    pub fn from_mime(mime: &str) -> Result<Self> {
        match mime {
            "text/plain" => Ok(Self::Plain),
            "application/pdf" => Ok(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(Self::Docx)
            }
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// Resolve a format from a file path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                Error::UnsupportedFormat(path.as_ref().display().to_string())
            })?;
        Self::from_tag(ext)
    }

    /// Canonical lowercase tag for this format.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local-file-header magic, the container for .docx.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect a document format from its leading bytes.
///
/// PDF and DOCX carry magic numbers; anything that decodes as UTF-8 is
/// treated as plain text. Bytes matching none of these fail with
/// [`Error::UnsupportedFormat`].
///
/// Note that a bare `.zip` archive is indistinguishable from a `.docx` at
/// the magic-byte level; the DOCX reader reports a parse error for zip
/// files that are not word-processing documents.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocumentFormat> {
    if data.starts_with(PDF_MAGIC) {
        return Ok(DocumentFormat::Pdf);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(DocumentFormat::Docx);
    }
    if std::str::from_utf8(data).is_ok() {
        return Ok(DocumentFormat::Plain);
    }
    Err(Error::UnsupportedFormat("unknown binary format".to_string()))
}

/// Detect a document format from a path, falling back to content sniffing
/// when the extension is missing or unrecognized.
pub fn detect_format<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<DocumentFormat> {
    match DocumentFormat::from_path(&path) {
        Ok(format) => Ok(format),
        Err(_) => detect_format_from_bytes(data),
    }
}
