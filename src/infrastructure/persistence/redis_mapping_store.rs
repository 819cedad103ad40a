//! Redis implementation of the mapping store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingStore, StoreError, StoreResult};

/// Redis store keeping one string key per mapping.
///
/// Keys are namespaced as `<namespace>:<short_id>` and carry no TTL.
pub struct RedisMappingStore {
    client: ConnectionManager,
    namespace: String,
}

impl RedisMappingStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, namespace: impl Into<String>) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Unavailable(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            namespace: namespace.into(),
        })
    }

    fn build_key(&self, short_id: &str) -> String {
        format!("{}:{}", self.namespace, short_id)
    }
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn put(&self, mapping: &Mapping) -> StoreResult<()> {
        let key = self.build_key(&mapping.short_id);
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&key, mapping.original_url.as_str())
            .await
            .map_err(map_redis_error)
    }

    async fn get(&self, short_id: &str) -> StoreResult<Option<Mapping>> {
        let key = self.build_key(short_id);
        let mut conn = self.client.clone();

        let url = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(map_redis_error)?;

        Ok(url.map(|original_url| Mapping::new(short_id, original_url)))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

fn map_redis_error(e: redis::RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_timeout() {
        StoreError::Unavailable(e.to_string())
    } else {
        StoreError::Query(e.to_string())
    }
}
