//! Backend client types and error definitions.

use thiserror::Error;

/// Errors that can occur while constructing or using the backend clients.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An endpoint URL failed to parse or join.
    #[error("invalid backend endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP client could not be built.
    #[error("HTTP client construction failed: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request-level transport failure (connect, timeout, body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {path}")]
    Status { status: u16, path: String },

    /// A document body failed to serialize or deserialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
