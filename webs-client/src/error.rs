//! Client error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, WebsError>;

/// Errors surfaced by the client, the body encoder and mock fixtures.
#[derive(Debug, Error)]
pub enum WebsError {
    /// Request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// Request could not be constructed (malformed URL).
    #[error("Failed to create request: {0}")]
    RequestBuild(String),

    /// The underlying transport could not be constructed.
    #[error("Failed to build HTTP transport: {0}")]
    Transport(#[source] reqwest::Error),

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No response headers arrived within the configured response timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Reading the response body failed.
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Response body could not be decoded as JSON into the requested type.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Error carried by a mock fixture.
    #[error("{0}")]
    Mock(String),
}

impl WebsError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_)) || matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if this is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }

    /// Check if the failure happened before anything was sent.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Encode(_) | Self::RequestBuild(_) | Self::Transport(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_classification() {
        let err = WebsError::Timeout(Duration::from_millis(50));
        assert!(err.is_timeout());
        assert!(!err.is_connection());
        assert_eq!(err.to_string(), "Request timed out after 50ms");
    }

    #[test]
    fn test_request_errors() {
        assert!(WebsError::Encode("bad".into()).is_request_error());
        assert!(WebsError::RequestBuild("bad url".into()).is_request_error());
        assert!(!WebsError::Mock("boom".into()).is_request_error());
    }

    #[test]
    fn test_decode_from_serde() {
        let err: WebsError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, WebsError::Decode(_)));
    }
}
