//! Remote backend clients.
//!
//! # Responsibilities
//! - Construct document-store and blob-store handles from validated config
//! - Perform JSON document CRUD and blob transfer with per-request timeouts
//! - Expose construction behind the `Connector` trait so the bootstrap can
//!   drive (and tests can script) it
//!
//! # Design Decisions
//! - Handles are cheap to clone; the underlying HTTP client pools connections
//! - Construction is redundancy-tolerant: building handles twice wires up two
//!   independent clients and corrupts nothing
//! - The offline cache is a separate, best-effort concern; see `persistence`

pub mod blobs;
pub mod connector;
pub mod documents;
pub mod persistence;
pub mod types;

pub use blobs::BlobStore;
pub use connector::{Connector, RemoteConnector};
pub use documents::DocumentStore;
pub use persistence::{enable_offline_cache, OfflineCache, PersistenceError};
pub use types::{BackendError, BackendResult};

/// The initialized client handles a successful bootstrap hands back.
///
/// Exclusively owned by the caller; clones share the same connection pools.
#[derive(Debug, Clone)]
pub struct BackendHandles {
    pub documents: DocumentStore,
    pub blobs: BlobStore,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::schema::BackendConfig;

    /// Handles wired to a dead localhost endpoint, for retry-machinery tests
    /// that never issue requests.
    pub(crate) fn handles() -> BackendHandles {
        let mut config = BackendConfig::default();
        config.api_key = "test-key".to_string();
        config.project_id = "test-project".to_string();
        config.storage_bucket = "test-bucket".to_string();
        config.document_endpoint = "http://127.0.0.1:1/v1".to_string();
        config.blob_endpoint = "http://127.0.0.1:1/v0".to_string();

        BackendHandles {
            documents: DocumentStore::new(&config).unwrap(),
            blobs: BlobStore::new(&config).unwrap(),
        }
    }
}
