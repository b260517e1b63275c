//! Ontology Factory
//!
//! Public entry point. `create(None)` returns the shared default ontology;
//! `create(Some(handle))` resolves the handle and returns a new instance
//! every call. Only converted artifacts on disk are reused between calls.

use std::sync::Arc;

use crate::domain::entities::LoadedOntology;
use crate::domain::ports::{ArtifactLoader, Converter, RemoteQueryClient};
use crate::error::OntologyResult;

use super::default_provider::DefaultOntologyProvider;
use super::resolver::HandleResolver;

pub struct OntologyFactory<C, L, Q>
where
    C: Converter,
    L: ArtifactLoader,
    Q: RemoteQueryClient,
{
    resolver: HandleResolver<C, L, Q>,
    default: Arc<DefaultOntologyProvider>,
}

impl<C, L, Q> OntologyFactory<C, L, Q>
where
    C: Converter,
    L: ArtifactLoader,
    Q: RemoteQueryClient,
{
    pub fn new(resolver: HandleResolver<C, L, Q>, default: Arc<DefaultOntologyProvider>) -> Self {
        Self { resolver, default }
    }

    pub fn resolver(&self) -> &HandleResolver<C, L, Q> {
        &self.resolver
    }

    pub fn default_provider(&self) -> &Arc<DefaultOntologyProvider> {
        &self.default
    }

    /// Create an ontology from `handle`, or return the default ontology
    pub fn create(&self, handle: Option<&str>) -> OntologyResult<Arc<LoadedOntology>> {
        match handle {
            None => self
                .default
                .get_or_try_init(|default_handle| self.resolver.resolve(default_handle)),
            Some(handle) => self.resolver.resolve(handle).map(Arc::new),
        }
    }
}
