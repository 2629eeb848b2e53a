//! Error types for the remote playback client.
//!
//! Payloads are plain strings so errors are `Clone` and can ride inside GUI
//! messages.

/// Result type alias for remote playback operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// No access token configured
    #[error("No access token configured (set SPOTIFY_ACCESS_TOKEN)")]
    MissingToken,

    /// Token rejected by the API
    #[error("Access token rejected, refresh it and restart")]
    Unauthorized,

    /// API answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Transport failed (DNS, TLS, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Response body didn't match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Background worker went away before answering
    #[error("Background worker failed: {0}")]
    Worker(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
