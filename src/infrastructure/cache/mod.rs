//! On-disk cache of converted artifacts

mod conversion_cache;

pub use conversion_cache::{CacheOutcome, CachedArtifact, ConversionCache, LOCK_DIR};
