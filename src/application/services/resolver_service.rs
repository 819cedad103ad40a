//! Identifier resolution service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use super::bounded;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::short_id::is_valid_short_id;

/// Service translating short identifiers back into original URLs.
///
/// Performs exactly one store lookup per call, with no retries.
pub struct ResolverService {
    store: Arc<dyn MappingStore>,
    store_timeout: Duration,
}

impl ResolverService {
    /// Creates a new resolver service.
    pub fn new(store: Arc<dyn MappingStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// Resolves `short_id` to the stored original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_id` is not a well-formed identifier.
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] if the store lookup fails or times out.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        if !is_valid_short_id(short_id) {
            return Err(AppError::bad_request(
                "Short identifier must be 7 URL-safe characters",
            ));
        }

        match bounded(self.store_timeout, self.store.get(short_id)).await {
            Ok(Some(mapping)) => {
                debug!(short_id, "Resolved mapping");
                Ok(mapping.original_url)
            }
            Ok(None) => {
                debug!(short_id, "No mapping for identifier");
                Err(AppError::NotFound)
            }
            Err(e) => {
                error!(short_id, error = %e, "Failed to look up mapping");
                Err(e.into())
            }
        }
    }
}
