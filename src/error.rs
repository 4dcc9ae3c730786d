//! Error types for linescribe

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by console operations
///
/// `dump_to` is deliberately absent: dumping the history is best effort and
/// reports its outcome as a plain `bool`.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The input stream could not be read
    #[error("Failed to read console input: {0}")]
    InputRead(#[source] std::io::Error),

    /// A file could not be opened or read for echoing
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Check if this error was caused by a bad argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("Source cannot be empty");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: Source cannot be empty");
    }

    #[test]
    fn test_file_read_mentions_path() {
        let err = Error::FileRead {
            path: PathBuf::from("/tmp/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().contains("/tmp/missing.txt"));
    }
}
