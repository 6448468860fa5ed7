//! Network reachability probing.
//!
//! # Responsibilities
//! - Answer "is the network reachable right now?" with a single bounded call
//! - Fold every failure mode into a boolean; a probe never errors
//!
//! # Design Decisions
//! - The probe targets a highly-available third-party resource, not the
//!   backend itself: it is a liveness hint, not a correctness gate
//! - No retries inside the probe; retry policy belongs to the bootstrap
//! - Timeout, DNS failure, transport error, and non-success status are all
//!   collapsed to `false` with no diagnostic passthrough

pub mod probe;

pub use probe::{HttpProber, Prober};
