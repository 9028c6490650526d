//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Sondar library error
    #[error("{0}")]
    Sondar(#[from] sondar::SondarError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad url");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("bad url"));
    }

    #[test]
    fn test_sondar_error_from() {
        let err: CliError = sondar::SondarError::page_load("https://x.test/", "status 500").into();
        assert!(err.to_string().contains("Failed to load page"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: CliError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }
}
