//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `converter/` - External conversion tool
//! - `cache/` - On-disk conversion cache
//! - `loader/` - Obographs JSON loader
//! - `remote/` - Remote query client

pub mod cache;
pub mod converter;
pub mod loader;
pub mod remote;

// Re-export for convenience
pub use cache::{CacheOutcome, CachedArtifact, ConversionCache};
pub use converter::ExternalConverter;
pub use loader::ObographJsonLoader;
pub use remote::SparqlEndpointClient;
