//! Centralized error types for inboxview.

use thiserror::Error;

/// All errors produced by the inboxview library.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The request never produced a response (connection refused, reset, timeout).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status code.
    #[error("Request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be decoded.
    #[error("Malformed response from '{url}': {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The configured backend URL cannot be used.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Create a `Transport` variant from a URL and a `reqwest::Error`.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// HTTP status of a `Status` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ViewerError::Status {
            url: "http://localhost:8025/api/emails/9".to_string(),
            status: 404,
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "Request to 'http://localhost:8025/api/emails/9' returned HTTP 404"
        );
    }

    #[test]
    fn test_decode_has_no_status() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ViewerError::Decode {
            url: "x".to_string(),
            source,
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Malformed response from 'x'"));
    }
}
