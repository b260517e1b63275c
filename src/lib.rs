//! ontofactory - resolve ontology handles into loaded ontologies
//!
//! A handle names an ontology by local path (`cache/ontologies/pato.json`),
//! OBO library reference (`obo:pato`), web URL (`http://...`) or bare
//! identifier for a remote query service (`pato`). Sources that are not
//! already obographs JSON are converted by an external tool once and the
//! result is cached on local storage.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DefaultOntologyProvider, HandleResolver, OntologyFactory};
pub use config::Config;
pub use domain::entities::{GraphDocument, LoadedOntology, OntologyPayload, RemoteOntology};
pub use domain::ports::{ArtifactLoader, Converter, RemoteQueryClient};
pub use domain::value_objects::{CacheKey, Handle, HandleKind, Strategy};
pub use error::{OntologyError, OntologyResult};
pub use infrastructure::{ConversionCache, ExternalConverter};
pub use presentation::{create_ontology_factory, ConcreteOntologyFactory};
