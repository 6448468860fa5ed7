//! Bootstrap integration tests against a mock backend.

use mediacat::backend::{Connector, RemoteConnector};
use mediacat::bootstrap::{BackoffPolicy, BootstrapError, Bootstrapper};
use mediacat::config::schema::BackendConfig;
use mediacat::connectivity::Prober;

mod common;

/// Prober that always reports a reachable network.
struct AlwaysOnline;

impl Prober for AlwaysOnline {
    async fn probe(&self) -> bool {
        true
    }
}

fn backend_config(backend: &common::MockBackend) -> BackendConfig {
    let mut config = BackendConfig::default();
    config.api_key = "test-key".to_string();
    config.project_id = "demo".to_string();
    config.storage_bucket = "demo-bucket".to_string();
    config.document_endpoint = backend.document_endpoint();
    config.blob_endpoint = backend.blob_endpoint();
    config.request_timeout_secs = 2;
    config
}

#[tokio::test]
async fn test_bootstrap_returns_working_handles() {
    let backend = common::MockBackend::start().await;

    let bootstrapper = Bootstrapper::new(
        AlwaysOnline,
        RemoteConnector::new(backend_config(&backend)),
        BackoffPolicy::default(),
    );

    let handles = bootstrapper.run().await.unwrap();

    // The handles must actually talk to the backend
    handles
        .documents
        .put("categories", "smoke", &serde_json::json!({"name": "Smoke"}))
        .await
        .unwrap();
    let doc = handles.documents.get("categories", "smoke").await.unwrap();
    assert_eq!(doc.unwrap()["name"], "Smoke");
}

#[tokio::test]
async fn test_bootstrap_fails_terminally_on_bad_endpoint() {
    let mut config = BackendConfig::default();
    config.api_key = "test-key".to_string();
    config.project_id = "demo".to_string();
    config.document_endpoint = "not a url".to_string();

    // Short delays so exhausting the budget stays fast
    let bootstrapper = Bootstrapper::new(
        AlwaysOnline,
        RemoteConnector::new(config),
        BackoffPolicy::new(1, 4, 2),
    );

    let err = bootstrapper.run().await.unwrap_err();
    match err {
        BootstrapError::ConstructionFailed { attempts, source } => {
            assert_eq!(attempts, 2);
            assert!(source.to_string().contains("invalid backend endpoint"));
        }
        other => panic!("expected ConstructionFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_repeated_construction_is_redundancy_tolerant() {
    let backend = common::MockBackend::start().await;
    let connector = RemoteConnector::new(backend_config(&backend));

    // Two independent constructions must both yield usable handles
    let first = connector.connect().await.unwrap();
    let second = connector.connect().await.unwrap();

    first
        .documents
        .put("categories", "a", &serde_json::json!({"name": "A"}))
        .await
        .unwrap();
    let via_second = second.documents.get("categories", "a").await.unwrap();
    assert!(via_second.is_some());
}
