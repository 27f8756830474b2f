//! In-memory implementation of the link store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError};

/// Link storage in a process-local map guarded by a single reader/writer lock.
///
/// `save` and `increment_hits` hold the write guard for their whole
/// check-and-mutate step; `get` shares the read guard. Contents are lost when
/// the process exits.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    /// Returns true if nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn save(&self, link: Link) -> Result<(), StoreError> {
        let mut links = self.links.write().await;

        match links.entry(link.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateId),
            Entry::Vacant(slot) => {
                slot.insert(link);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Link, StoreError> {
        self.links
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn increment_hits(&self, id: &str) -> Result<(), StoreError> {
        let mut links = self.links.write().await;
        let link = links.get_mut(id).ok_or(StoreError::NotFound)?;
        link.hits += 1;
        Ok(())
    }
}
