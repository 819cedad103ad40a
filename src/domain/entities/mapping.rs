//! Mapping entity: the persisted link between a short identifier and its URL.

/// A stored short identifier to original URL pair.
///
/// `short_id` is derived from `original_url` and acts as the primary key.
/// The URL is kept byte-for-byte as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_id: String,
    pub original_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            original_url: original_url.into(),
        }
    }

    /// Builds the mapping for a URL, deriving its identifier.
    pub fn for_url(original_url: impl Into<String>) -> Self {
        let original_url = original_url.into();
        let short_id = crate::utils::short_id::derive_short_id(&original_url);
        Self {
            short_id,
            original_url,
        }
    }
}
