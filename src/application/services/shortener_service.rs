//! Mapping creation service.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tracing::{error, info};

use super::bounded;
use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Path segment placed between the base URL and the identifier.
pub const SHORT_PATH_PREFIX: &str = "/a/";

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub short_id: String,
    pub short_url: String,
}

/// Service for creating short URLs.
///
/// Derives the identifier from the URL and writes the mapping with a single
/// store call. An existing record at the same identifier is overwritten, so
/// two distinct URLs that share an identifier resolve to whichever was
/// written last.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
    base_url: String,
    store_timeout: Duration,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// A trailing `/` on `base_url` is dropped.
    pub fn new(store: Arc<dyn MappingStore>, base_url: &str, store_timeout: Duration) -> Self {
        Self {
            store,
            base_url: base_url.trim_end_matches('/').to_string(),
            store_timeout,
        }
    }

    /// Shortens `original_url` and stores the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, or if it could not
    /// be sent back in a `Location` header (control characters, for example).
    ///
    /// Returns [`AppError::Internal`] if the store write fails or times out.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortLink, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request("URL must not be empty"));
        }

        if HeaderValue::from_str(original_url).is_err() {
            return Err(AppError::bad_request(
                "URL contains characters not allowed in a redirect",
            ));
        }

        let mapping = Mapping::for_url(original_url);

        if let Err(e) = bounded(self.store_timeout, self.store.put(&mapping)).await {
            error!(short_id = %mapping.short_id, error = %e, "Failed to store mapping");
            return Err(e.into());
        }

        info!(short_id = %mapping.short_id, "Stored mapping");

        Ok(ShortLink {
            short_url: self.short_url(&mapping.short_id),
            short_id: mapping.short_id,
        })
    }

    /// Constructs the full short URL for an identifier.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}{}{}", self.base_url, SHORT_PATH_PREFIX, short_id)
    }
}
