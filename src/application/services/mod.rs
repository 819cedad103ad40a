//! Business logic services for the application layer.

pub mod resolver_service;
pub mod shortener_service;

pub use resolver_service::ResolverService;
pub use shortener_service::{ShortLink, ShortenerService};

use std::future::Future;
use std::time::Duration;

use crate::domain::repositories::{StoreError, StoreResult};

/// Runs a single store call, failing with [`StoreError::Timeout`] once `limit` elapses.
pub(crate) async fn bounded<T>(
    limit: Duration,
    call: impl Future<Output = StoreResult<T>>,
) -> StoreResult<T> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(limit.as_millis() as u64)),
    }
}
