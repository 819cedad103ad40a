#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use hash_shortener::config::{Config, StoreBackend};
use hash_shortener::domain::entities::Mapping;
use hash_shortener::domain::repositories::{MappingStore, StoreError, StoreResult};
use hash_shortener::infrastructure::persistence::MemoryMappingStore;
use hash_shortener::routes::router;
use hash_shortener::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "https://url.omoknooni.link";

/// Store whose every call fails the way an unreachable backend does.
pub struct FailingStore;

#[async_trait]
impl MappingStore for FailingStore {
    async fn put(&self, _mapping: &Mapping) -> StoreResult<()> {
        Err(StoreError::Unavailable(
            "connection refused: secret-db.internal:5432".to_string(),
        ))
    }

    async fn get(&self, _short_id: &str) -> StoreResult<Option<Mapping>> {
        Err(StoreError::Unavailable(
            "connection refused: secret-db.internal:5432".to_string(),
        ))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Store that never answers within any reasonable timeout.
pub struct StalledStore;

#[async_trait]
impl MappingStore for StalledStore {
    async fn put(&self, _mapping: &Mapping) -> StoreResult<()> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }

    async fn get(&self, _short_id: &str) -> StoreResult<Option<Mapping>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        true
    }
}

pub fn test_config() -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        store_backend: StoreBackend::Memory,
        mapping_table: "url_mappings".to_string(),
        database_url: None,
        redis_url: None,
        store_timeout_ms: 1000,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        db_max_connections: 1,
        db_connect_timeout: 1,
    }
}

pub fn create_test_server(store: Arc<dyn MappingStore>) -> TestServer {
    create_test_server_with_config(store, &test_config())
}

pub fn create_test_server_with_config(store: Arc<dyn MappingStore>, config: &Config) -> TestServer {
    let state = AppState::new(store, config);
    TestServer::new(router(state)).unwrap()
}

/// Server over a fresh in-memory store; the store is returned for inspection.
pub fn create_memory_server() -> (TestServer, Arc<MemoryMappingStore>) {
    let store = Arc::new(MemoryMappingStore::new());
    let server = create_test_server(store.clone());
    (server, store)
}

pub fn create_failing_server() -> TestServer {
    create_test_server(Arc::new(FailingStore))
}

/// Server over a store that stalls, with a 50ms store timeout.
pub fn create_stalled_server() -> TestServer {
    let config = Config {
        store_timeout_ms: 50,
        ..test_config()
    };
    create_test_server_with_config(Arc::new(StalledStore), &config)
}

/// Extracts the identifier from a returned short URL.
pub fn short_id_of(short_url: &str) -> &str {
    short_url
        .rsplit_once("/a/")
        .map(|(_, id)| id)
        .expect("short URL contains /a/")
}
