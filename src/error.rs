//! Error types for the textfreq library.

use std::io;
use thiserror::Error;

/// Result type alias for textfreq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text extraction and analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The declared format is not recognized or has no registered reader.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The bytes are not valid text under the declared format's encoding.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The document structure is malformed and the parser cannot traverse it.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error serializing an analysis to an output format.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Parse(err.to_string()),
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("epub".to_string());
        assert_eq!(err.to_string(), "Unsupported document format: epub");

        let err = Error::Decode("invalid utf-8 sequence".to_string());
        assert!(err.to_string().starts_with("Decode error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bad = [0xFFu8, 0xFE];
        let utf8_err = std::str::from_utf8(&bad).unwrap_err();
        let err: Error = utf8_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
