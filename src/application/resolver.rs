//! Handle Resolver
//!
//! Classifies a handle and acquires the ontology through the matching
//! strategy:
//!
//! | Handle | Acquisition |
//! |---|---|
//! | existing `*.json` file | loaded directly |
//! | other existing file with a `.` | converted, cached by path digest |
//! | `obo:NAME[.ext]` | converted from the library URL, cached by name |
//! | `http:...` | converted, cached by URL digest |
//! | anything else | remote query client |
//!
//! Failures propagate immediately. Classification is first-match, so a
//! failing strategy never falls back to a later one.

use std::path::{Path, PathBuf};

use crate::config::LibraryConfig;
use crate::domain::entities::{LoadedOntology, OntologyPayload};
use crate::domain::ports::{ArtifactLoader, Converter, RemoteQueryClient};
use crate::domain::services::{classify, ClassifierSettings};
use crate::domain::value_objects::{CacheKey, Handle, HandleKind, LocalFormat};
use crate::error::OntologyResult;
use crate::infrastructure::cache::ConversionCache;

/// How the classified handle will be acquired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    /// Load an obographs file as-is
    Direct { path: PathBuf },
    /// Convert `source` unless `artifact` already exists, then load it
    Convert {
        source: String,
        artifact_name: String,
        artifact: PathBuf,
    },
    /// Ask the remote query client for `id`
    Query { id: String },
}

/// Result of classifying a handle, before any I/O beyond the file probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPlan {
    /// Handle text as recorded on the loaded ontology (library handles carry
    /// the inferred extension)
    pub handle: String,
    pub kind: HandleKind,
    pub acquisition: Acquisition,
}

pub struct HandleResolver<C, L, Q>
where
    C: Converter,
    L: ArtifactLoader,
    Q: RemoteQueryClient,
{
    cache: ConversionCache<C>,
    loader: L,
    remote: Q,
    settings: ClassifierSettings,
    library_base_url: String,
}

impl<C, L, Q> HandleResolver<C, L, Q>
where
    C: Converter,
    L: ArtifactLoader,
    Q: RemoteQueryClient,
{
    pub fn new(cache: ConversionCache<C>, loader: L, remote: Q) -> Self {
        Self::with_library(cache, loader, remote, &LibraryConfig::default())
    }

    pub fn with_library(
        cache: ConversionCache<C>,
        loader: L,
        remote: Q,
        library: &LibraryConfig,
    ) -> Self {
        Self {
            cache,
            loader,
            remote,
            settings: ClassifierSettings {
                default_extension: library.default_extension.clone(),
            },
            library_base_url: library.base_url.clone(),
        }
    }

    pub fn cache(&self) -> &ConversionCache<C> {
        &self.cache
    }

    /// Public URL for a library handle remainder (`pato.owl`)
    pub fn library_url(&self, remainder: &str) -> String {
        format!("{}{}", self.library_base_url, remainder)
    }

    /// Classify `raw` and work out where its artifact comes from
    pub fn plan(&self, raw: &str) -> OntologyResult<ResolutionPlan> {
        let handle = Handle::new(raw)?;
        let kind = classify(&handle, &self.settings, &|path: &Path| path.is_file());

        let (handle_text, acquisition) = match &kind {
            HandleKind::LocalFile {
                path,
                format: LocalFormat::Canonical,
            } => (raw.to_string(), Acquisition::Direct { path: path.clone() }),
            HandleKind::LocalFile { .. } => (raw.to_string(), self.convert_by_digest(raw)),
            HandleKind::Library {
                artifact_name,
                remainder,
            } => (
                artifact_name.clone(),
                Acquisition::Convert {
                    source: self.library_url(remainder),
                    artifact_name: artifact_name.clone(),
                    artifact: self.cache.artifact_path(artifact_name),
                },
            ),
            HandleKind::RemoteUrl { url } => (raw.to_string(), self.convert_by_digest(url)),
            HandleKind::RemoteQuery { id } => {
                (raw.to_string(), Acquisition::Query { id: id.clone() })
            }
        };

        Ok(ResolutionPlan {
            handle: handle_text,
            kind,
            acquisition,
        })
    }

    fn convert_by_digest(&self, locator: &str) -> Acquisition {
        let key = CacheKey::from_locator(locator);
        Acquisition::Convert {
            source: locator.to_string(),
            artifact: self.cache.key_path(&key),
            artifact_name: key.to_string(),
        }
    }

    /// Resolve a handle into a freshly loaded ontology
    pub fn resolve(&self, raw: &str) -> OntologyResult<LoadedOntology> {
        tracing::info!(handle = raw, "determining strategy");
        let plan = self.plan(raw)?;
        let strategy = plan.kind.strategy();
        tracing::info!(handle = raw, %strategy, "strategy chosen");

        if let HandleKind::LocalFile {
            format: LocalFormat::Unrecognized,
            path,
        } = &plan.kind
        {
            tracing::info!(
                path = %path.display(),
                "attempting to convert a file that is neither obo nor owl"
            );
        }

        let payload = match &plan.acquisition {
            Acquisition::Direct { path } => OntologyPayload::Graph(self.loader.load(path)?),
            Acquisition::Convert {
                source,
                artifact_name,
                ..
            } => {
                let path = self.cache.get_or_convert(source, artifact_name)?;
                OntologyPayload::Graph(self.loader.load(&path)?)
            }
            Acquisition::Query { id } => OntologyPayload::Remote(self.remote.load(id)?),
        };

        Ok(LoadedOntology::new(plan.handle, strategy, payload))
    }
}
