//! Bootstrap error definitions.

use thiserror::Error;

use crate::backend::types::BackendError;

/// Terminal failures of the bootstrap sequence.
///
/// Transient failures (no connectivity, construction error) are retried
/// inside the sequence and only become one of these once the shared retry
/// budget is exhausted.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The connectivity probe never saw a reachable network.
    #[error("no network connectivity after {attempts} retries")]
    Unreachable { attempts: u32 },

    /// Backend client construction kept failing; carries the last cause.
    #[error("backend initialization failed after {attempts} retries: {source}")]
    ConstructionFailed {
        attempts: u32,
        #[source]
        source: BackendError,
    },
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
