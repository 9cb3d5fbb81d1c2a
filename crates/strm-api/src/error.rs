//! Error types for strm-api

/// Result type for strm-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to a TorrServer instance
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// The listing body was not valid JSON
    #[error("malformed listing response: {0}")]
    Decode(#[from] serde_json::Error),
}
