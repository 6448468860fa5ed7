//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file or environment
//!     → loader.rs (read, parse, apply env overrides)
//!     → validation.rs (semantic checks, required credentials)
//!     → AppConfig accepted into the system
//! ```
//!
//! # Design Decisions
//! - A missing API key is a setup error, not a transient one: it is rejected
//!   here, before any network activity, and never retried
//! - Environment variables override file values so deployments can keep
//!   credentials out of checked-in config

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, BackendConfig, ProberConfig, RetryConfig};
pub use validation::validate_config;
