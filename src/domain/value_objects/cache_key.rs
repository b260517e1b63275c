//! Cache Key Value Object
//!
//! A deterministic, fixed-length digest naming a cached artifact.

use std::fmt;

/// Storage key for a converted artifact
///
/// Wraps the lowercase hex SHA-256 digest of a source locator (a local path
/// or URL). Unlike a content hash it carries no prefix: the key is used
/// verbatim as a file name under the cache root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Length of a key in hex characters
    pub const LEN: usize = 64;

    /// Derive the key for a source locator
    pub fn from_locator(locator: &str) -> Self {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(locator.as_bytes());
        Self(format!("{:x}", digest))
    }

    /// Accept an existing key, e.g. a file name read back from the cache root
    pub fn parse(s: &str) -> Option<Self> {
        let valid = s.len() == Self::LEN
            && s.bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        valid.then(|| Self(s.to_string()))
    }

    /// Get the hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
