//! Core domain entities.
//!
//! The service persists exactly one entity, [`Mapping`]. There are no foreign
//! keys or secondary indexes; the short identifier is the only key.

pub mod mapping;

pub use mapping::Mapping;
