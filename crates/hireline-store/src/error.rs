use thiserror::Error;

use hireline_api::ApiError;
use hireline_shared::ValidationErrors;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A field check failed; nothing was sent to the remote store.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The remote exchange failed; the cache was left untouched.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A mutation of the same kind is still in flight.
    #[error("A {0} operation is already in flight")]
    MutationInFlight(&'static str),

    /// Export file I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
