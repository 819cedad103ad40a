//! Store contract for short identifier mappings.

use crate::domain::entities::Mapping;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to the backing store.
///
/// Every variant is treated the same way by the services: it is logged and
/// surfaced to the caller as a generic internal error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out after {0} ms")]
    Timeout(u64),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value persistence keyed by short identifier.
///
/// A single logical table holding `short_id -> original_url`. Writes are
/// unconditional overwrites of one record; there are no cross-key
/// transactions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::RedisMappingStore`] - Redis
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - process-local
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Writes the mapping, replacing any record already stored at its `short_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend rejects or cannot execute the write.
    async fn put(&self, mapping: &Mapping) -> StoreResult<()>;

    /// Looks up a mapping by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on backend failures. A missing key is never an error.
    async fn get(&self, short_id: &str) -> StoreResult<Option<Mapping>>;

    /// Checks if the store backend is reachable.
    async fn health_check(&self) -> bool;
}
