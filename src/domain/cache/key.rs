//! Cache key derivation

use sha2::{Digest, Sha256};

/// Namespace prefix for classification result keys
const KEY_NAMESPACE: &str = "classify";

/// Derives the cache key for a piece of input text.
///
/// Normalization policy: the text is trimmed of leading and trailing
/// whitespace; case and interior whitespace are preserved. The key is the
/// hex sha256 digest of the normalized text under the `classify:`
/// namespace, so identical text always maps to the same key and distinct
/// text collides only with negligible probability.
pub fn classification_key(text: &str) -> String {
    let digest = Sha256::digest(text.trim().as_bytes());
    format!("{}:{}", KEY_NAMESPACE, hex::encode(digest))
}
