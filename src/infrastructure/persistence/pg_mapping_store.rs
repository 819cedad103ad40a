//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingStore, StoreError, StoreResult};

/// PostgreSQL store keeping mappings in a single two-column table.
///
/// The table name comes from configuration and is validated as a plain SQL
/// identifier before it reaches this type; values are always bound.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
    table: String,
}

impl PgMappingStore {
    /// Creates a new store over an existing connection pool.
    pub fn new(pool: Arc<PgPool>, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    /// Creates the mapping table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the DDL statement fails.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                short_id TEXT PRIMARY KEY,
                original_url TEXT NOT NULL
            )",
            self.table
        );

        sqlx::query(&ddl)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn put(&self, mapping: &Mapping) -> StoreResult<()> {
        let sql = format!(
            r#"
            INSERT INTO {} (short_id, original_url)
            VALUES ($1, $2)
            ON CONFLICT (short_id) DO UPDATE SET original_url = EXCLUDED.original_url
            "#,
            self.table
        );

        sqlx::query(&sql)
            .bind(&mapping.short_id)
            .bind(&mapping.original_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get(&self, short_id: &str) -> StoreResult<Option<Mapping>> {
        let sql = format!(
            "SELECT short_id, original_url FROM {} WHERE short_id = $1",
            self.table
        );

        let row = sqlx::query_as::<_, (String, String)>(&sql)
            .bind(short_id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(|(short_id, original_url)| Mapping::new(short_id, original_url)))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}

/// Classifies SQLx errors into connectivity and query failures.
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StoreError::Unavailable(e.to_string()),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StoreError::InvalidData(e.to_string())
        }
        _ => StoreError::Query(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_missing_row_is_query_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::Query(_)
        ));
    }
}
