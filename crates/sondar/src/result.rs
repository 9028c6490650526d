//! Result and error types for Sondar.

use thiserror::Error;

/// Result type for Sondar operations
pub type SondarResult<T> = Result<T, SondarError>;

/// Errors that can occur in Sondar
///
/// Per-resource probe failures are never errors; they are captured in
/// [`crate::ProbeOutcome`]. These variants cover operational failures that
/// prevent a run from proceeding at all.
#[derive(Debug, Error)]
pub enum SondarError {
    /// Address could not be parsed as an absolute URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending address
        url: String,
        /// Parser message
        message: String,
    },

    /// The target page could not be loaded
    #[error("Failed to load page {url}: {message}")]
    PageLoad {
        /// Page address
        url: String,
        /// What went wrong
        message: String,
    },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SondarError {
    /// Create an invalid URL error
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a page load error
    #[must_use]
    pub fn page_load(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PageLoad {
            url: url.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_error() {
        let err = SondarError::invalid_url("nope", "relative URL without a base");
        assert!(err.to_string().contains("Invalid URL"));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_page_load_error() {
        let err = SondarError::page_load("https://example.com/", "status 500");
        assert!(err.to_string().contains("Failed to load page"));
        assert!(err.to_string().contains("status 500"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SondarError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }
}
