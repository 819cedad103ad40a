//! Process-local mapping store for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingStore, StoreResult};

/// In-memory store backed by a `HashMap`.
///
/// Data lives only as long as the process. Each `put` replaces the record at
/// its key under a write lock, matching the single-record atomicity of the
/// persistent backends.
#[derive(Default)]
pub struct MemoryMappingStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn put(&self, mapping: &Mapping) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .insert(mapping.short_id.clone(), mapping.original_url.clone());
        Ok(())
    }

    async fn get(&self, short_id: &str) -> StoreResult<Option<Mapping>> {
        Ok(self
            .inner
            .read()
            .await
            .get(short_id)
            .map(|url| Mapping::new(short_id, url.clone())))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
