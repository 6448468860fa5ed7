//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honor `RUST_LOG` when set, falling back to the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Retry decisions, probe outcomes, and cache degradation are logged with
//!   structured fields so failures can be reconstructed from logs alone

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_level` applies when `RUST_LOG` is not set. Calling this more
/// than once is an error in tracing-subscriber, so it runs exactly once at
/// process start.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mediacat={}", default_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
