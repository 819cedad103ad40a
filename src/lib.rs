//! # Hash Shortener
//!
//! A deterministic URL shortening service built with Axum.
//!
//! A long URL is hashed with SHA-256, encoded as URL-safe base64 and truncated
//! to a 7-character identifier. The identifier-to-URL mapping is written to a
//! key-value store; resolving the identifier answers with a 301 redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Mapping`](domain::entities::Mapping) entity and store contract
//! - **Application Layer** ([`application`]) - Shortener and resolver services
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL, Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /api/conv` with `{ "params": { "url": "..." } }` returns `<BASE_URL>/a/<id>`
//! - `GET /a/{short_id}` redirects to the stored URL
//! - `GET /health` reports store reachability
//!
//! ## Identifier Collisions
//!
//! Two different URLs can share an identifier. Writes are unconditional, so
//! the last write for an identifier decides where it redirects.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolverService, ShortLink, ShortenerService};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::{MappingStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::short_id::derive_short_id;
}
