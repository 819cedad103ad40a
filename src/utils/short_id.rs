//! Short identifier derivation and validation.
//!
//! Identifiers are a pure function of the URL bytes: SHA-256 digest, encoded
//! as URL-safe base64 without padding, truncated to [`SHORT_ID_LEN`]
//! characters. Distinct URLs can share an identifier; no collision detection
//! happens here or in the store.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Number of characters kept from the encoded digest.
pub const SHORT_ID_LEN: usize = 7;

/// Derives the short identifier for a URL.
///
/// Hashes the exact UTF-8 bytes of `url` (no normalization), so URLs that
/// differ only in case or trailing slash get different identifiers.
///
/// # Examples
///
/// ```
/// use hash_shortener::utils::short_id::derive_short_id;
///
/// let id = derive_short_id("https://example.com");
/// assert_eq!(id, "EAaArVR");
/// assert_eq!(id, derive_short_id("https://example.com"));
/// ```
pub fn derive_short_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);

    encoded.truncate(SHORT_ID_LEN);
    encoded
}

/// Returns true if `candidate` has the shape of a derived identifier.
///
/// # Rules
///
/// - Exactly 7 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
pub fn is_valid_short_id(candidate: &str) -> bool {
    candidate.len() == SHORT_ID_LEN && candidate.bytes().all(is_url_safe_byte)
}

fn is_url_safe_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}
