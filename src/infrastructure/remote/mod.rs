//! Remote query client implementations

mod sparql;

pub use sparql::SparqlEndpointClient;
