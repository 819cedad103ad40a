//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::MappingStore`] trait and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Mapping creation
//! - [`services::resolver_service::ResolverService`] - Identifier resolution

pub mod services;
