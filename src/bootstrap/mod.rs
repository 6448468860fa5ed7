//! Resilient backend bootstrap.
//!
//! # States
//! - CheckConnectivity: probe general network reachability
//! - Construct: build the backend client handles
//! - Ready: handles returned to the caller
//! - Failed: retry budget exhausted, terminal error
//!
//! # State Transitions
//! ```text
//! CheckConnectivity → CheckConnectivity: probe unreachable, budget left (sleep, n += 1)
//! CheckConnectivity → Failed:           probe unreachable, budget exhausted
//! CheckConnectivity → Construct:        probe reachable
//! Construct → Ready:                    handles built
//! Construct → CheckConnectivity:        construction error, budget left (sleep, n += 1)
//! Construct → Failed:                   construction error, budget exhausted
//! ```
//!
//! # Design Decisions
//! - Explicit bounded loop, not recursion: the terminal condition is auditable
//!   and the call stack stays flat
//! - Connectivity and construction failures draw from one shared attempt
//!   counter, matching the observed behavior this client reproduces
//! - No caching of the Ready state: every call runs the full sequence
//! - No cancellation token and no single-flight; concurrent callers each run
//!   an independent sequence, which is safe because construction is
//!   redundancy-tolerant

pub mod backoff;
pub mod initializer;
pub mod types;

pub use backoff::BackoffPolicy;
pub use initializer::Bootstrapper;
pub use types::{BootstrapError, BootstrapResult};
