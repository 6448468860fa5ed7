//! The bootstrap sequence: probe, construct, back off, repeat.

use tokio::time;

use crate::backend::{BackendHandles, Connector};
use crate::bootstrap::backoff::BackoffPolicy;
use crate::bootstrap::types::{BootstrapError, BootstrapResult};
use crate::connectivity::Prober;

/// Drives backend construction to completion, tolerating transient
/// unavailability.
///
/// Generic over the prober and connector so the retry machinery can be
/// exercised without a network.
pub struct Bootstrapper<P, C> {
    prober: P,
    connector: C,
    policy: BackoffPolicy,
}

impl<P, C> Bootstrapper<P, C>
where
    P: Prober,
    C: Connector,
{
    pub fn new(prober: P, connector: C, policy: BackoffPolicy) -> Self {
        Self {
            prober,
            connector,
            policy,
        }
    }

    /// Run one full bootstrap sequence.
    ///
    /// Connectivity failures and construction failures share a single attempt
    /// counter and retry budget. Each construction retry re-enters from the
    /// connectivity check. The sequence runs to completion; there is no
    /// external cancellation.
    pub async fn run(&self) -> BootstrapResult<BackendHandles> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt: u32 = 0;

        loop {
            if !self.prober.probe().await {
                if attempt >= max_attempts {
                    tracing::error!(attempts = attempt, "No network after max retries");
                    return Err(BootstrapError::Unreachable { attempts: attempt });
                }
                let delay = self.policy.delay_for_attempt(attempt);
                tracing::info!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "No internet connection, backing off before retry"
                );
                time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            match self.connector.connect().await {
                Ok(handles) => {
                    tracing::info!(attempt, "Backend initialized");
                    return Ok(handles);
                }
                Err(e) => {
                    if attempt >= max_attempts {
                        tracing::error!(
                            attempts = attempt,
                            error = %e,
                            "Backend initialization failed after max retries"
                        );
                        return Err(BootstrapError::ConstructionFailed {
                            attempts: attempt,
                            source: e,
                        });
                    }
                    let delay = self.policy.delay_for_attempt(attempt);
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Backend initialization failed, backing off before retry"
                    );
                    time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
