//! ArtifactLoader port
//!
//! Reads a canonical artifact from local storage into a graph document.

use std::path::Path;

use crate::domain::entities::GraphDocument;
use crate::error::OntologyResult;

pub trait ArtifactLoader: Send + Sync {
    /// Load the artifact at `path`
    ///
    /// Fails with `NotFound` when the file is missing and `Conversion` when
    /// it is not a valid obographs document.
    fn load(&self, path: &Path) -> OntologyResult<GraphDocument>;
}
