//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{ResolverService, ShortenerService};
use crate::config::Config;
use crate::domain::repositories::MappingStore;

/// Services and the store handle shared by all requests.
///
/// Holds no mutable state of its own; everything stateful lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub resolver: Arc<ResolverService>,
    pub store: Arc<dyn MappingStore>,
    /// Upper bound for store calls made directly by handlers.
    pub store_timeout: Duration,
}

impl AppState {
    /// Wires both services to a single store handle.
    pub fn new(store: Arc<dyn MappingStore>, config: &Config) -> Self {
        let shortener = Arc::new(ShortenerService::new(
            store.clone(),
            &config.base_url,
            config.store_timeout(),
        ));
        let resolver = Arc::new(ResolverService::new(store.clone(), config.store_timeout()));

        Self {
            shortener,
            resolver,
            store,
            store_timeout: config.store_timeout(),
        }
    }
}
