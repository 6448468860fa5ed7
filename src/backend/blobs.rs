//! Blob-store client.
//!
//! # Responsibilities
//! - Upload, download, and delete named objects in the configured bucket
//! - Derive stable public URLs for stored objects

use std::time::Duration;

use url::Url;

use crate::backend::types::{BackendError, BackendResult};
use crate::config::schema::BackendConfig;

/// HTTP client for the remote blob store.
///
/// Objects live at `{endpoint}/{bucket}/o/{name}`.
#[derive(Debug, Clone)]
pub struct BlobStore {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl BlobStore {
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let base_url: Url = format!(
            "{}/{}/o/",
            config.blob_endpoint.trim_end_matches('/'),
            config.storage_bucket
        )
        .parse()
        .map_err(|e: url::ParseError| BackendError::InvalidEndpoint(e.to_string()))?;

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

    fn object_url(&self, name: &str) -> BackendResult<Url> {
        self.base_url
            .join(name)
            .map_err(|e| BackendError::InvalidEndpoint(e.to_string()))
    }

    /// Public URL of an object, without issuing any request.
    pub fn public_url(&self, name: &str) -> BackendResult<String> {
        Ok(self.object_url(name)?.to_string())
    }

    /// Upload an object, replacing any previous content.
    pub async fn upload(&self, name: &str, content_type: &str, bytes: Vec<u8>) -> BackendResult<()> {
        let url = self.object_url(name)?;
        let response = self
            .client
            .put(url.clone())
            .header("x-api-key", &self.api_key)
            .header("content-type", content_type)
            .body(bytes)
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

    /// Download an object, or `None` if it does not exist.
    pub async fn download(&self, name: &str) -> BackendResult<Option<Vec<u8>>> {
        let url = self.object_url(name)?;
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

        Ok(Some(response.bytes().await?.to_vec()))
    }

    /// Delete an object. Deleting an absent object is not an error.
    pub async fn delete(&self, name: &str) -> BackendResult<()> {
        let url = self.object_url(name)?;
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
}
