//! Default Ontology Provider
//!
//! Holds the one ontology returned for handle-less requests. The slot is
//! filled at most once: initialisation runs under a lock, so concurrent first
//! callers wait for a single resolution instead of racing. A failed
//! initialisation leaves the slot empty and the next caller tries again.
//! Once filled the slot is never replaced or cleared.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::entities::LoadedOntology;
use crate::error::OntologyResult;

#[derive(Debug)]
pub struct DefaultOntologyProvider {
    handle: String,
    slot: Mutex<Option<Arc<LoadedOntology>>>,
}

impl DefaultOntologyProvider {
    /// Provider that resolves `handle` on first use
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            slot: Mutex::new(None),
        }
    }

    /// Provider already holding `ontology`; nothing is ever resolved
    pub fn preloaded(ontology: LoadedOntology) -> Self {
        Self {
            handle: ontology.handle().to_string(),
            slot: Mutex::new(Some(Arc::new(ontology))),
        }
    }

    /// Handle resolved on first use
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The default ontology, if it has been created
    pub fn get(&self) -> Option<Arc<LoadedOntology>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.get().is_some()
    }

    /// Return the default ontology, creating it with `init` if the slot is
    /// empty
    pub fn get_or_try_init<F>(&self, init: F) -> OntologyResult<Arc<LoadedOntology>>
    where
        F: FnOnce(&str) -> OntologyResult<LoadedOntology>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slot.as_ref() {
            tracing::debug!(handle = %self.handle, "using default ontology");
            return Ok(Arc::clone(existing));
        }

        tracing::info!(handle = %self.handle, "creating default ontology");
        let ontology = Arc::new(init(&self.handle)?);
        *slot = Some(Arc::clone(&ontology));
        Ok(ontology)
    }
}
