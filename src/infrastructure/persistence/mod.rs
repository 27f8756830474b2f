//! Link store implementations.
//!
//! # Stores
//!
//! - [`MemoryLinkStore`] - Process-local map behind a reader/writer lock
//! - [`PgLinkStore`] - PostgreSQL table keyed by short id

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
