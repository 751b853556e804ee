//! Error types for logging operations.

use std::io;
use thiserror::Error;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur while setting up a logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened or created.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A level name that is not one of debug, info, warn or error.
    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_unknown_level_display() {
        let err = LoggingError::UnknownLevel("trace".to_string());
        assert_eq!(err.to_string(), "Unknown log level 'trace'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "read-only");
        let logging_err: LoggingError = io_err.into();

        assert!(matches!(logging_err, LoggingError::Io(_)));
        assert!(logging_err.to_string().starts_with("I/O error"));
    }
}
