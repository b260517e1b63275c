//! Obographs JSON Loader
//!
//! Deserialises an artifact produced by the converter (or a `.json` file
//! supplied directly) into a [`GraphDocument`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::entities::GraphDocument;
use crate::domain::ports::ArtifactLoader;
use crate::error::{OntologyError, OntologyResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct ObographJsonLoader;

impl ObographJsonLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactLoader for ObographJsonLoader {
    fn load(&self, path: &Path) -> OntologyResult<GraphDocument> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => OntologyError::NotFound {
                path: path.to_path_buf(),
            },
            _ => OntologyError::Io(e),
        })?;

        let doc: GraphDocument = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            OntologyError::Conversion {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(
            path = %path.display(),
            graphs = doc.graphs.len(),
            nodes = doc.node_count(),
            edges = doc.edge_count(),
            "loaded obographs document"
        );
        Ok(doc)
    }
}
