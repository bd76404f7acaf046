//! # Errors

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors produced while building, loading, or saving a vocabulary.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The input could not be read, or the output could not be written.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,

        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid structured data, or lacks a required field.
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// An invalid option or argument.
    #[error("Argument error: {0}")]
    Argument(String),
}

impl VocabError {
    /// Build a [`VocabError::Io`] for `path`.
    pub fn io<P: AsRef<Path>>(
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for VocabError {
    fn from(e: serde_json::Error) -> Self {
        VocabError::DataFormat(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_display_and_source() {
        let err = VocabError::io(
            "missing/vocab.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing/vocab.json"));
        assert!(msg.contains("no such file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: VocabError = json_err.into();
        assert!(matches!(err, VocabError::DataFormat(_)));
        assert!(err.source().is_none());
    }
}
