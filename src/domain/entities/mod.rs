//! Domain Entities
//!
//! - `LoadedOntology` - an ontology resolved from a handle
//! - `GraphDocument` - the obographs payload of a converted artifact

mod ontology;

pub use ontology::{
    Graph, GraphDocument, GraphEdge, GraphNode, LoadedOntology, OntologyPayload, RemoteOntology,
};
