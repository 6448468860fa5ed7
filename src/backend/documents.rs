//! Document-store client.
//!
//! # Responsibilities
//! - Address JSON documents by collection and id under the project path
//! - Enforce a per-request timeout on every call
//! - Map transport failures and non-success statuses into `BackendError`

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::backend::types::{BackendError, BackendResult};
use crate::config::schema::BackendConfig;

/// HTTP client for the remote document store.
///
/// Documents live at `{endpoint}/{project_id}/{collection}/{id}` and carry
/// arbitrary JSON bodies; this client does not interpret them.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl DocumentStore {
    /// Build a document-store client from validated configuration.
    ///
    /// Fails on an unparseable endpoint or an HTTP client that cannot be
    /// constructed; both feed the bootstrap retry path.
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let base_url = join_project_root(&config.document_endpoint, &config.project_id)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    fn document_url(&self, collection: &str, id: &str) -> BackendResult<Url> {
        self.base_url
            .join(&format!("{}/{}", collection, id))
            .map_err(|e| BackendError::InvalidEndpoint(e.to_string()))
    }

    fn collection_url(&self, collection: &str) -> BackendResult<Url> {
        self.base_url
            .join(collection)
            .map_err(|e| BackendError::InvalidEndpoint(e.to_string()))
    }

    /// Fetch one document, or `None` if it does not exist.
    pub async fn get(&self, collection: &str, id: &str) -> BackendResult<Option<Value>> {
        let url = self.document_url(collection, id)?;
        let response = self
            .client
            .get(url.clone())
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(BackendError::Status {
                status: response.status().as_u16(),
                path: url.path().to_string(),
            });
        }

        Ok(Some(response.json().await?))
    }

    /// Create or replace one document.
    pub async fn put(&self, collection: &str, id: &str, document: &Value) -> BackendResult<()> {
        let url = self.document_url(collection, id)?;
        let response = self
            .client
            .put(url.clone())
            .header("x-api-key", &self.api_key)
            .json(document)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status {
                status: response.status().as_u16(),
                path: url.path().to_string(),
            });
        }
        Ok(())
    }

    /// Delete one document. Deleting an absent document is not an error.
    pub async fn delete(&self, collection: &str, id: &str) -> BackendResult<()> {
        let url = self.document_url(collection, id)?;
        let response = self
            .client
            .delete(url.clone())
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        if !response.status().is_success() {
            return Err(BackendError::Status {
                status: response.status().as_u16(),
                path: url.path().to_string(),
            });
        }
        Ok(())
    }

    /// List an entire collection as `(id, document)` pairs.
    pub async fn list(&self, collection: &str) -> BackendResult<Vec<(String, Value)>> {
        let url = self.collection_url(collection)?;
        let response = self
            .client
            .get(url.clone())
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status {
                status: response.status().as_u16(),
                path: url.path().to_string(),
            });
        }

        let body: serde_json::Map<String, Value> = response.json().await?;
        Ok(body.into_iter().collect())
    }
}

/// Join the endpoint and project id into the base URL all document paths
/// hang off. The trailing slash matters for `Url::join`.
fn join_project_root(endpoint: &str, project_id: &str) -> BackendResult<Url> {
    format!("{}/{}/", endpoint.trim_end_matches('/'), project_id)
        .parse()
        .map_err(|e: url::ParseError| BackendError::InvalidEndpoint(e.to_string()))
}
