//! Storage contract for short links.

use crate::domain::entities::Link;
use async_trait::async_trait;

/// Errors reported by a [`LinkStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with the same identifier is already stored.
    #[error("duplicate short id")]
    DuplicateId,

    /// No record exists for the identifier.
    #[error("link not found")]
    NotFound,

    /// The backing database failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Keyed storage of [`Link`] records.
///
/// The store is the single source of truth for identifier uniqueness. A
/// `save` checks and inserts in one atomic step, so of any number of
/// concurrent saves with the same `id` exactly one succeeds and the rest get
/// [`StoreError::DuplicateId`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - In-process map behind a lock
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if `link.id` is already taken.
    /// Returns [`StoreError::Database`] on backend failures.
    async fn save(&self, link: Link) -> Result<(), StoreError>;

    /// Loads the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record exists.
    async fn get(&self, id: &str) -> Result<Link, StoreError>;

    /// Adds exactly one to the hit counter of `id`.
    ///
    /// The increment is atomic with respect to concurrent callers; no hit is
    /// lost when many resolves race on the same record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record exists.
    async fn increment_hits(&self, id: &str) -> Result<(), StoreError>;
}
