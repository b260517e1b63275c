//! Converter port
//!
//! Turns a source ontology (local file or URL) into an obographs JSON file.
//!
//! Implementations:
//! - `ExternalConverter` - runs an external tool (owltools by default)
//! - test fakes that record invocations and write fixtures

use std::path::Path;

use crate::error::OntologyResult;

pub trait Converter: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Convert `source` into a canonical artifact at `destination`
    ///
    /// On success exactly one file exists at `destination`. On failure its
    /// existence and content are unspecified; callers must not trust it.
    fn convert(&self, source: &str, destination: &Path) -> OntologyResult<()>;
}

impl<C: Converter + ?Sized> Converter for std::sync::Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn convert(&self, source: &str, destination: &Path) -> OntologyResult<()> {
        (**self).convert(source, destination)
    }
}
