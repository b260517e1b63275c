//! SPARQL Endpoint Client
//!
//! Binds a bare ontology identifier to a SPARQL endpoint. Loading is lazy:
//! no query is sent here, the returned [`RemoteOntology`] tells downstream
//! graph code where to direct its lookups.

use crate::config::RemoteConfig;
use crate::domain::entities::RemoteOntology;
use crate::domain::ports::RemoteQueryClient;
use crate::error::{OntologyError, OntologyResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlEndpointClient {
    endpoint: String,
}

impl SparqlEndpointClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for SparqlEndpointClient {
    fn default() -> Self {
        Self::from_config(&RemoteConfig::default())
    }
}

impl RemoteQueryClient for SparqlEndpointClient {
    fn load(&self, id: &str) -> OntologyResult<RemoteOntology> {
        if id.chars().any(char::is_whitespace) {
            return Err(OntologyError::RemoteQuery {
                id: id.to_string(),
                message: "identifier must not contain whitespace".to_string(),
            });
        }
        tracing::debug!(id, endpoint = %self.endpoint, "binding ontology to endpoint");
        Ok(RemoteOntology {
            id: id.to_string(),
            endpoint: self.endpoint.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_binds_identifier_to_endpoint() {
        let client = SparqlEndpointClient::new("http://sparql.example.org/sparql");
        let remote = client.load("pato").unwrap();
        assert_eq!(remote.id, "pato");
        assert_eq!(remote.endpoint, "http://sparql.example.org/sparql");
    }

    #[test]
    fn whitespace_identifier_is_rejected() {
        let client = SparqlEndpointClient::default();
        let err = client.load("pato go").unwrap_err();
        assert!(matches!(err, OntologyError::RemoteQuery { .. }));
    }

    #[test]
    fn default_uses_configured_endpoint() {
        assert_eq!(
            SparqlEndpointClient::default().endpoint(),
            RemoteConfig::default().endpoint
        );
    }
}
