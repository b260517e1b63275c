//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::OntologyResult;

use super::loader::{self, ConfigWarning};

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding converted artifacts (defaults to the system temp dir)
    #[serde(default = "default_cache_root")]
    pub root: PathBuf,

    /// Serialise conversions across processes with an advisory file lock
    #[serde(default = "default_true")]
    pub cross_process_lock: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            root: default_cache_root(),
            cross_process_lock: true,
        }
    }
}

fn default_cache_root() -> PathBuf {
    std::env::temp_dir()
}

fn default_true() -> bool {
    true
}

/// External converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_converter_program")]
    pub program: String,

    /// Arguments placed before the source locator
    #[serde(default)]
    pub args: Vec<String>,

    /// Kill the converter after this many seconds (unset or 0 = wait forever)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConverterConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_converter_program(),
            args: Vec::new(),
            timeout_secs: None,
        }
    }
}

fn default_converter_program() -> String {
    "owltools".to_string()
}

/// OBO library configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Replaces the `obo:` prefix to form the download URL
    #[serde(default = "default_library_base_url")]
    pub base_url: String,

    /// Appended to library handles that carry no extension
    #[serde(default = "default_library_extension")]
    pub default_extension: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            base_url: default_library_base_url(),
            default_extension: default_library_extension(),
        }
    }
}

fn default_library_base_url() -> String {
    "http://purl.obolibrary.org/obo/".to_string()
}

fn default_library_extension() -> String {
    "owl".to_string()
}

/// Remote query service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_endpoint")]
    pub endpoint: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_remote_endpoint(),
        }
    }
}

fn default_remote_endpoint() -> String {
    "http://sparql.hegroup.org/sparql".to_string()
}

/// Default ontology configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Handle resolved when `create` is called without one
    #[serde(default = "default_handle")]
    pub handle: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            handle: default_handle(),
        }
    }
}

fn default_handle() -> String {
    "cache/ontologies/pato.json".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub converter: ConverterConfig,

    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OntologyResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> OntologyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// `ONTOFACTORY_*` environment overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }
}
