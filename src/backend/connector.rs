//! Backend handle construction.

use crate::backend::blobs::BlobStore;
use crate::backend::documents::DocumentStore;
use crate::backend::types::BackendError;
use crate::backend::BackendHandles;
use crate::config::schema::BackendConfig;

/// Builds backend handles on demand.
///
/// The bootstrap treats this as an opaque capability: it does not inspect
/// error causes beyond "construction failed", and it may call `connect`
/// repeatedly across retries.
pub trait Connector {
    fn connect(
        &self,
    ) -> impl std::future::Future<Output = Result<BackendHandles, BackendError>> + Send;
}

/// Connector for the real remote backend.
#[derive(Debug, Clone)]
pub struct RemoteConnector {
    config: BackendConfig,
}

impl RemoteConnector {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl Connector for RemoteConnector {
    async fn connect(&self) -> Result<BackendHandles, BackendError> {
        let documents = DocumentStore::new(&self.config)?;
        let blobs = BlobStore::new(&self.config)?;

        tracing::debug!(
            project_id = %self.config.project_id,
            storage_bucket = %self.config.storage_bucket,
            "Backend handles constructed"
        );

        Ok(BackendHandles { documents, blobs })
    }
}
