//! Error types for Kitbase
//!
//! This module provides unified error handling for everything that can go
//! wrong between the client and the equipment API: transport failures,
//! timeouts, non-success status codes, and undecodable responses.

use thiserror::Error;

/// Fallback notification text when the server gives us nothing usable
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// The main error type for API interactions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    // ========================================================================
    // Server Errors
    // ========================================================================
    /// The server answered with a non-success status code
    ///
    /// `detail` carries the human-readable message extracted from the
    /// response body's `{"detail": ...}` field, when one was present.
    #[error("Server returned status {status}")]
    Status { status: u16, detail: Option<String> },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// The request did not complete within the client timeout
    #[error("Request timed out")]
    Timeout,

    /// The request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    // ========================================================================
    // Decoding Errors
    // ========================================================================
    /// The response body could not be decoded into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create a status error without a server-supplied detail
    pub fn status(status: u16) -> Self {
        ApiError::Status {
            status,
            detail: None,
        }
    }

    /// Create a status error carrying the server-supplied detail message
    pub fn status_with_detail(status: u16, detail: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            detail: Some(detail.into()),
        }
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        ApiError::Network(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }

    /// The HTTP status code, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-reported detail message, if one was extracted
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                detail: Some(d), ..
            } => Some(d.as_str()),
            _ => None,
        }
    }

    /// Best-effort human-readable message for notifications
    ///
    /// Prefers the server's own detail text and falls back to a generic
    /// message so the user is never shown raw transport debris.
    pub fn user_message(&self) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    /// Check if this error is a 404 from the server
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if this error came from a server response (vs. transport)
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// Check if this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout)
    }

    /// Check if this error is a transport-level failure
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout)
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_with_detail() {
        let err = ApiError::status_with_detail(409, "Conflict");
        assert!(err.is_status());
        assert!(!err.is_network());
        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.detail(), Some("Conflict"));
        assert_eq!(err.user_message(), "Conflict");
        assert_eq!(err.to_string(), "Server returned status 409");
    }

    #[test]
    fn test_status_error_without_detail_falls_back() {
        let err = ApiError::status(500);
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_not_found_classification() {
        let err = ApiError::status_with_detail(404, "Equipment not found");
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Equipment not found");

        let err = ApiError::status(500);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_timeout_is_network_class() {
        let err = ApiError::Timeout;
        assert!(err.is_timeout());
        assert!(err.is_network());
        assert!(!err.is_status());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_network_error() {
        let err = ApiError::network("connection refused");
        assert!(err.is_network());
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_decode_error() {
        let err = ApiError::decode("missing field `count`");
        assert!(!err.is_status());
        assert!(!err.is_network());
        assert_eq!(
            err.to_string(),
            "Failed to decode response: missing field `count`"
        );
    }
}
