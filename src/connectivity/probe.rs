//! Reachability probe against a well-known external endpoint.

use std::time::Duration;

use tokio::time;

use crate::config::schema::ProberConfig;

/// A reachability check. Implementations must be infallible: every failure
/// path folds into `false`.
pub trait Prober {
    /// One bounded reachability check. No retries, no errors.
    fn probe(&self) -> impl std::future::Future<Output = bool> + Send;
}

/// Probes reachability with a single HTTP GET against a fixed,
/// highly-available resource.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
    probe_url: String,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(config: &ProberConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            probe_url: config.probe_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }
}

impl Prober for HttpProber {
    async fn probe(&self) -> bool {
        let request = self
            .client
            .get(&self.probe_url)
            .header("user-agent", "mediacat-connectivity-probe");

        match time::timeout(self.timeout, request.send()).await {
            Ok(Ok(response)) => {
                let reachable = response.status().is_success();
                if !reachable {
                    tracing::debug!(
                        status = %response.status(),
                        "Connectivity probe returned non-success status"
                    );
                }
                reachable
            }
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "Connectivity probe failed: transport error");
                false
            }
            Err(_) => {
                tracing::debug!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Connectivity probe failed: timeout"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_false_not_error() {
        let config = ProberConfig {
            // Reserved TEST-NET-1 address, guaranteed unroutable
            probe_url: "http://192.0.2.1/favicon.ico".to_string(),
            timeout_ms: 200,
        };
        let prober = HttpProber::new(&config);
        assert!(!prober.probe().await);
    }
}
