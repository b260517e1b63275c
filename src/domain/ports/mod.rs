//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_loader;
pub mod converter;
pub mod remote_query;

pub use artifact_loader::ArtifactLoader;
pub use converter::Converter;
pub use remote_query::RemoteQueryClient;
