//! Resilient media-catalog backend client.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌─────────────────────────────────────────────────┐
//!                  │                    MEDIACAT                     │
//!                  │                                                 │
//!   CLI command    │  ┌─────────┐    ┌───────────┐    ┌────────────┐ │
//!   ───────────────┼─▶│ config  │───▶│ bootstrap │───▶│  backend   │ │
//!                  │  │ loader  │    │ (retry)   │    │  handles   │ │
//!                  │  └─────────┘    └─────┬─────┘    └─────┬──────┘ │
//!                  │                       │                │        │
//!                  │                       ▼                ▼        │
//!                  │              ┌──────────────┐   ┌────────────┐  │
//!                  │              │ connectivity │   │  catalog   │  │
//!                  │              │    prober    │   │   store    │  │
//!                  │              └──────────────┘   └────────────┘  │
//!                  │                                                 │
//!                  │  Cross-cutting: observability (tracing),        │
//!                  │  offline cache (best-effort, warn-only)         │
//!                  └─────────────────────────────────────────────────┘
//! ```
//!
//! The bootstrap sequence probes general network reachability before each
//! construction attempt and retries both failure causes from a single shared
//! backoff budget. Once handles are returned they are owned by the caller;
//! repeated bootstraps are safe but never deduplicated.

// Core subsystems
pub mod backend;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod connectivity;

// Cross-cutting concerns
pub mod observability;

pub use backend::{BackendHandles, BlobStore, Connector, DocumentStore, RemoteConnector};
pub use bootstrap::{BackoffPolicy, BootstrapError, Bootstrapper};
pub use config::schema::AppConfig;
pub use connectivity::{HttpProber, Prober};
