//! LoadedOntology entity - the in-memory result of resolving a handle
//!
//! The graph payload mirrors the obographs JSON envelope closely enough to
//! count and look up nodes and edges. Everything else (axioms, property
//! chains, metadata) is kept as opaque JSON for downstream graph code.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::Strategy;

/// A node in an obographs graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lbl: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// A subject-predicate-object edge in an obographs graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub sub: String,
    pub pred: String,
    pub obj: String,
}

/// One graph of an obographs document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Remaining members (`equivalentNodesSets`, `logicalDefinitionAxioms`, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A parsed obographs JSON document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub graphs: Vec<Graph>,
}

impl GraphDocument {
    pub fn node_count(&self) -> usize {
        self.graphs.iter().map(|g| g.nodes.len()).sum()
    }

    pub fn edge_count(&self) -> usize {
        self.graphs.iter().map(|g| g.edges.len()).sum()
    }

    /// Find a node by CURIE or IRI across all graphs
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.graphs
            .iter()
            .flat_map(|g| g.nodes.iter())
            .find(|n| n.id == id)
    }
}

/// An ontology served by a remote query endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOntology {
    /// Identifier passed to the endpoint (`pato`)
    pub id: String,
    /// Endpoint the identifier is bound to
    pub endpoint: String,
}

/// Where a loaded ontology's content lives
#[derive(Debug, Clone, PartialEq)]
pub enum OntologyPayload {
    /// Fully materialised from a canonical artifact
    Graph(GraphDocument),
    /// Backed by a remote query service
    Remote(RemoteOntology),
}

/// An ontology resolved from a handle
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedOntology {
    handle: String,
    strategy: Strategy,
    payload: OntologyPayload,
}

impl LoadedOntology {
    pub fn new(handle: impl Into<String>, strategy: Strategy, payload: OntologyPayload) -> Self {
        Self {
            handle: handle.into(),
            strategy,
            payload,
        }
    }

    /// Handle this ontology was resolved from (after extension inference)
    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn payload(&self) -> &OntologyPayload {
        &self.payload
    }

    /// The graph document, if this ontology was loaded from an artifact
    pub fn graph(&self) -> Option<&GraphDocument> {
        match &self.payload {
            OntologyPayload::Graph(doc) => Some(doc),
            OntologyPayload::Remote(_) => None,
        }
    }

    /// The remote binding, if this ontology is query-backed
    pub fn remote(&self) -> Option<&RemoteOntology> {
        match &self.payload {
            OntologyPayload::Remote(remote) => Some(remote),
            OntologyPayload::Graph(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATO_SNIPPET: &str = r#"{
        "graphs": [{
            "id": "http://purl.obolibrary.org/obo/pato.owl",
            "nodes": [
                {"id": "PATO:0000001", "lbl": "quality", "type": "CLASS"},
                {"id": "PATO:0000051", "lbl": "morphology", "type": "CLASS"}
            ],
            "edges": [
                {"sub": "PATO:0000051", "pred": "is_a", "obj": "PATO:0000001"}
            ],
            "equivalentNodesSets": []
        }]
    }"#;

    #[test]
    fn graph_document_deserializes_obographs() {
        let doc: GraphDocument = serde_json::from_str(PATO_SNIPPET).unwrap();
        assert_eq!(doc.graphs.len(), 1);
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.edge_count(), 1);
        assert!(doc.graphs[0].extra.contains_key("equivalentNodesSets"));
    }

    #[test]
    fn node_lookup_by_id() {
        let doc: GraphDocument = serde_json::from_str(PATO_SNIPPET).unwrap();
        let node = doc.node("PATO:0000051").unwrap();
        assert_eq!(node.lbl.as_deref(), Some("morphology"));
        assert_eq!(node.node_type.as_deref(), Some("CLASS"));
        assert!(doc.node("PATO:9999999").is_none());
    }

    #[test]
    fn loaded_ontology_accessors() {
        let graph = LoadedOntology::new(
            "obo:pato.owl",
            Strategy::Library,
            OntologyPayload::Graph(GraphDocument::default()),
        );
        assert!(graph.graph().is_some());
        assert!(graph.remote().is_none());
        assert_eq!(graph.strategy(), Strategy::Library);

        let remote = LoadedOntology::new(
            "pato",
            Strategy::RemoteQuery,
            OntologyPayload::Remote(RemoteOntology {
                id: "pato".to_string(),
                endpoint: "http://sparql.example.org/sparql".to_string(),
            }),
        );
        assert!(remote.graph().is_none());
        assert_eq!(remote.remote().unwrap().id, "pato");
    }
}
