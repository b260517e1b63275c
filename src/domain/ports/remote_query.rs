//! RemoteQueryClient port
//!
//! Loads an ontology by bare identifier from a query service. The client's
//! own contract decides whether lookups happen eagerly or lazily.

use crate::domain::entities::RemoteOntology;
use crate::error::OntologyResult;

pub trait RemoteQueryClient: Send + Sync {
    /// Load the ontology named `id`; failures surface as `RemoteQuery`
    fn load(&self, id: &str) -> OntologyResult<RemoteOntology>;
}
