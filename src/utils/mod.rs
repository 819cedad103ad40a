//! Utility functions shared across layers.
//!
//! - [`short_id`] - Short identifier derivation and shape validation

pub mod short_id;
