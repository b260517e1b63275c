//! Presentation Layer
//!
//! This layer handles:
//! - Wiring the factory with infrastructure dependencies
//! - Output formatting (text/JSON) for the CLI
//!
//! ## Usage
//!
//! ```ignore
//! use ontofactory::presentation::factory;
//!
//! let config = ontofactory::Config::load_or_default(None);
//! let factory = factory::create_ontology_factory(&config);
//! let pato = factory.create(Some("obo:pato"))?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_conversion_cache, create_ontology_factory, ConcreteOntologyFactory};
