//! Application Layer
//!
//! Orchestrates classification, caching and loading.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain classification rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `HandleResolver` - Classifies a handle and acquires the ontology
//! - `DefaultOntologyProvider` - Compute-once slot for the default ontology
//! - `OntologyFactory` - Public entry point combining both

pub mod default_provider;
pub mod ontology_factory;
pub mod resolver;

pub use default_provider::DefaultOntologyProvider;
pub use ontology_factory::OntologyFactory;
pub use resolver::{Acquisition, HandleResolver, ResolutionPlan};
