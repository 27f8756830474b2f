//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short identifier mapped to its original URL, with an access counter.
///
/// `id` and `url` never change after the record is saved. `hits` only grows,
/// one step per successful resolve, and `created_at` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub hits: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a record as loaded from storage.
    pub fn new(id: String, url: String, hits: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url,
            hits,
            created_at,
        }
    }

    /// Builds a fresh record with zero hits, stamped with the current time.
    pub fn fresh(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(id.into(), url.into(), 0, Utc::now())
    }
}
