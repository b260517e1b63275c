//! Test environment builder for isolated ontofactory testing.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use tempfile::TempDir;

use ontofactory::infrastructure::{ObographJsonLoader, SparqlEndpointClient};
use ontofactory::{ConversionCache, DefaultOntologyProvider, HandleResolver, OntologyFactory};

use super::converters::RecordingConverter;

pub type TestFactory =
    OntologyFactory<Arc<RecordingConverter>, ObographJsonLoader, SparqlEndpointClient>;

/// Result of running the ontofactory binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated working directory and cache directory
pub struct TestEnv {
    pub work_dir: TempDir,
    pub cache_dir: TempDir,
    pub converter: Arc<RecordingConverter>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            cache_dir: TempDir::new().unwrap(),
            converter: Arc::new(RecordingConverter::default()),
        }
    }

    /// Write `content` under the working directory and return its path
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn cache_path(&self) -> &Path {
        self.cache_dir.path()
    }

    /// Cache backed by the shared recording converter
    pub fn cache(&self) -> ConversionCache<Arc<RecordingConverter>> {
        ConversionCache::new(self.cache_dir.path(), Arc::clone(&self.converter))
    }

    pub fn resolver(
        &self,
    ) -> HandleResolver<Arc<RecordingConverter>, ObographJsonLoader, SparqlEndpointClient> {
        HandleResolver::new(
            self.cache(),
            ObographJsonLoader::new(),
            SparqlEndpointClient::new("http://sparql.example.org/sparql"),
        )
    }

    pub fn factory(&self, provider: Arc<DefaultOntologyProvider>) -> TestFactory {
        OntologyFactory::new(self.resolver(), provider)
    }

    /// Run the binary from the working directory with an isolated cache
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_ontofactory"))
            .args(args)
            .current_dir(self.work_dir.path())
            .env("HOME", self.work_dir.path())
            .env("XDG_CONFIG_HOME", self.work_dir.path().join(".config"))
            .env("ONTOFACTORY_CACHE_DIR", self.cache_dir.path())
            .env("ONTOFACTORY_CONVERTER", "ontofactory-test-missing-converter")
            .env_remove("ONTOFACTORY_DEFAULT_HANDLE")
            .env_remove("ONTOFACTORY_REMOTE_ENDPOINT")
            .env_remove("ONTOFACTORY_LIBRARY_BASE_URL")
            .env_remove("RUST_LOG")
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
