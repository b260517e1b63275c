//! Converter fakes.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use ontofactory::{Converter, OntologyError, OntologyResult};

use super::fixtures::CONVERTED_JSON;

/// Writes `CONVERTED_JSON` and remembers every source it was asked for
#[derive(Default)]
pub struct RecordingConverter {
    calls: AtomicUsize,
    sources: Mutex<Vec<String>>,
}

impl RecordingConverter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sources(&self) -> Vec<String> {
        self.sources.lock().unwrap().clone()
    }
}

impl Converter for RecordingConverter {
    fn name(&self) -> &str {
        "recording"
    }

    fn convert(&self, source: &str, destination: &Path) -> OntologyResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sources.lock().unwrap().push(source.to_string());
        fs::write(destination, CONVERTED_JSON)?;
        Ok(())
    }
}

/// Fails every conversion with a non-zero exit code
pub struct FailingConverter;

impl Converter for FailingConverter {
    fn name(&self) -> &str {
        "failing"
    }

    fn convert(&self, source: &str, _destination: &Path) -> OntologyResult<()> {
        Err(OntologyError::ExternalTool {
            exit_code: Some(1),
            command: format!("failing {}", source),
        })
    }
}
