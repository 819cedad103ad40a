//! Mapping store implementations.
//!
//! # Stores
//!
//! - [`PgMappingStore`] - PostgreSQL table via SQLx
//! - [`RedisMappingStore`] - Redis string keys
//! - [`MemoryMappingStore`] - process-local map for development and tests

pub mod memory_mapping_store;
pub mod pg_mapping_store;
pub mod redis_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
pub use redis_mapping_store::RedisMappingStore;
