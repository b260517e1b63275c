//! Factory wiring
//!
//! Creates the ontology factory with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{DefaultOntologyProvider, HandleResolver, OntologyFactory};
use crate::config::Config;
use crate::infrastructure::{
    ConversionCache, ExternalConverter, ObographJsonLoader, SparqlEndpointClient,
};

/// The factory with production dependencies
pub type ConcreteOntologyFactory =
    OntologyFactory<ExternalConverter, ObographJsonLoader, SparqlEndpointClient>;

/// Create the conversion cache described by `config`
pub fn create_conversion_cache(config: &Config) -> ConversionCache<ExternalConverter> {
    ConversionCache::new(
        config.cache.root.clone(),
        ExternalConverter::from_config(&config.converter),
    )
    .with_cross_process_lock(config.cache.cross_process_lock)
}

/// Create an ontology factory with its own default-ontology provider
pub fn create_ontology_factory(config: &Config) -> ConcreteOntologyFactory {
    let provider = Arc::new(DefaultOntologyProvider::new(config.defaults.handle.clone()));
    create_ontology_factory_with_provider(config, provider)
}

/// Create an ontology factory sharing an existing default-ontology provider
pub fn create_ontology_factory_with_provider(
    config: &Config,
    provider: Arc<DefaultOntologyProvider>,
) -> ConcreteOntologyFactory {
    let resolver = HandleResolver::with_library(
        create_conversion_cache(config),
        ObographJsonLoader::new(),
        SparqlEndpointClient::from_config(&config.remote),
        &config.library,
    );
    OntologyFactory::new(resolver, provider)
}
