//! Category catalog.
//!
//! # Responsibilities
//! - CRUD and search over video/manga categories
//! - Keep a client-side mirror of the remote collection for cheap reads
//! - Fall back to the offline cache when the remote store is unreachable
//!
//! # Design Decisions
//! - Creation deduplicates by (name, kind): asking for an existing category
//!   returns it instead of minting a duplicate
//! - Search is a case-insensitive substring match on the name
//! - Mirror writes happen only after the remote write succeeds

pub mod store;
pub mod types;

pub use store::CategoryStore;
pub use types::{Category, CategoryKind};
