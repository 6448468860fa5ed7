//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the catalog client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Remote backend credentials and endpoints.
    pub backend: BackendConfig,

    /// Connectivity prober settings.
    pub prober: ProberConfig,

    /// Bootstrap retry settings.
    pub retry: RetryConfig,

    /// Offline cache settings.
    pub cache: CacheConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Fixed credential surface for the remote backend.
///
/// These are the named fields the hosted service hands out per project; all
/// of them are opaque strings to this client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project API key. Required; its absence is a fatal misconfiguration.
    pub api_key: String,

    /// Authentication domain (e.g., "my-project.example.app").
    pub auth_domain: String,

    /// Project identifier; used to derive document paths.
    pub project_id: String,

    /// Blob storage bucket identifier.
    pub storage_bucket: String,

    /// Push-messaging sender id. Unused by this client but part of the
    /// credential set, so it is carried through.
    pub messaging_sender_id: String,

    /// Application identifier.
    pub app_id: String,

    /// Base URL of the document-store API.
    #[serde(default = "default_document_endpoint")]
    pub document_endpoint: String,

    /// Base URL of the blob-store API.
    #[serde(default = "default_blob_endpoint")]
    pub blob_endpoint: String,

    /// Per-request timeout in seconds for backend calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_domain: String::new(),
            project_id: String::new(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
            document_endpoint: default_document_endpoint(),
            blob_endpoint: default_blob_endpoint(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_document_endpoint() -> String {
    "https://docs.mediacat-backend.example/v1".to_string()
}

fn default_blob_endpoint() -> String {
    "https://blobs.mediacat-backend.example/v0".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

/// Connectivity prober configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProberConfig {
    /// URL of a highly-available resource used as a reachability signal.
    pub probe_url: String,

    /// Probe timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            probe_url: "https://www.google.com/favicon.ico".to_string(),
            timeout_ms: 5_000,
        }
    }
}

/// Bootstrap retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retry attempts shared across connectivity and
    /// construction failures.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 1_000,
            max_delay_ms: 32_000,
        }
    }
}

/// Offline cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable the best-effort local cache.
    pub enabled: bool,

    /// Directory holding the cache file and its lock.
    pub directory: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: ".mediacat-cache".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
