//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cache_key;
mod handle;

pub use cache_key::CacheKey;
pub use handle::{
    Handle, HandleKind, LocalFormat, Strategy, CANONICAL_EXTENSION, KNOWN_SOURCE_EXTENSIONS,
    LIBRARY_PREFIX, WEB_PREFIX,
};
