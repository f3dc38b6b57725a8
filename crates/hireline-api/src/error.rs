use thiserror::Error;

/// Errors produced by the access layer.
///
/// The remote store does not let this layer distinguish a vanished
/// record from a failed exchange, so callers treat every variant as one
/// "operation failed" class; the split exists for logging.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: connection, TLS, timeout, body decode.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote store answered with a non-success status.
    #[error("Remote store answered {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
