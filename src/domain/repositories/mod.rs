//! Storage trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Stores
//!
//! - [`LinkStore`] - Uniqueness-enforcing link storage with atomic hit counting

pub mod link_store;

pub use link_store::{LinkStore, StoreError};

#[cfg(test)]
pub use link_store::MockLinkStore;
