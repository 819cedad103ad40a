//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for input checks.

pub mod health;
pub mod shorten;
