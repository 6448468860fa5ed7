//! Exponential backoff with a hard cap.

use std::time::Duration;

use crate::config::schema::RetryConfig;

/// Deterministic capped exponential backoff.
///
/// No jitter: retry sequences here are per-process and infrequent, and the
/// delays must stay predictable for the caller's worst-case wait bound.
#[derive(Debug, Clone, Copy)]
pub struct BackoffPolicy {
    base_delay_ms: u64,
    max_delay_ms: u64,
    max_attempts: u32,
}

impl BackoffPolicy {
    pub fn new(base_delay_ms: u64, max_delay_ms: u64, max_attempts: u32) -> Self {
        Self {
            base_delay_ms,
            max_delay_ms,
            max_attempts,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.base_delay_ms, config.max_delay_ms, config.max_attempts)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the retry following attempt `n`: min(base · 2^n, max).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let shift = attempt.min(20);
        let multiplier = 1_u64 << shift;
        let delay_ms = self
            .base_delay_ms
            .saturating_mul(multiplier)
            .min(self.max_delay_ms);
        Duration::from_millis(delay_ms)
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::new(1_000, 32_000, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubles_from_base() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(1_000));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(2_000));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_millis(16_000));
    }

    #[test]
    fn test_caps_at_max() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay_for_attempt(5), Duration::from_millis(32_000));
        assert_eq!(policy.delay_for_attempt(17), Duration::from_millis(32_000));
        // Shift saturates well past the cap without overflow
        assert_eq!(policy.delay_for_attempt(u32::MAX), Duration::from_millis(32_000));
    }

    #[test]
    fn test_monotone_non_decreasing() {
        let policy = BackoffPolicy::default();
        let mut previous = Duration::ZERO;
        for attempt in 0..24 {
            let delay = policy.delay_for_attempt(attempt);
            assert!(delay >= previous, "delay regressed at attempt {}", attempt);
            assert!(delay <= Duration::from_millis(32_000));
            previous = delay;
        }
    }
}
