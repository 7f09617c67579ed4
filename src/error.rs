//! Error types for the draftkit library.

use std::io;
use thiserror::Error;

/// Result type alias for draftkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The raw document could not be deserialized.
    #[error("Document deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The content map could not be deserialized.
    #[error("Invalid content map: {0}")]
    InvalidContentMap(String),

    /// Error while producing an output format (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Render("bad state".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad state");

        let err = Error::InvalidContentMap("expected object".to_string());
        assert_eq!(err.to_string(), "Invalid content map: expected object");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Document deserialization error"));
    }
}
