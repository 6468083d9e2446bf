//! Transport-level errors.
//!
//! Raised when the ask request cannot be sent, the service answers with a
//! non-success status, or the response body breaks off mid-stream.

use thiserror::Error;

/// HTTP transport failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Connection to the server failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request or body read timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server returned a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Reading the response body failed
    #[error("IO error: {0}")]
    Io(String),

    /// The configured endpoint is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Anything else reported by the HTTP stack
    #[error("HTTP error: {0}")]
    Other(String),
}

impl TransportError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::ConnectionFailed(_) => "E_NET_CONN",
            TransportError::Timeout(_) => "E_NET_TIMEOUT",
            TransportError::Status { .. } => "E_NET_HTTP",
            TransportError::Io(_) => "E_NET_IO",
            TransportError::InvalidUrl(_) => "E_NET_URL",
            TransportError::Other(_) => "E_NET_OTHER",
        }
    }

    /// Whether the service itself answered (as opposed to the network failing).
    pub fn is_server_status(&self) -> bool {
        matches!(self, TransportError::Status { .. })
    }
}

/// Classify a reqwest error into a TransportError.
pub fn classify_reqwest_error(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        TransportError::InvalidUrl(err.to_string())
    } else if err.is_body() || err.is_decode() {
        TransportError::Io(err.to_string())
    } else if let Some(status) = err.status() {
        TransportError::Status {
            status: status.as_u16(),
            message: err.to_string(),
        }
    } else {
        TransportError::Other(err.to_string())
    }
}
