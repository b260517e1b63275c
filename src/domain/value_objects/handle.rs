//! Ontology handle value objects
//!
//! A handle is the string a caller uses to name an ontology. Classification
//! turns it into a [`HandleKind`], which carries everything the resolver
//! needs to acquire the ontology.

use std::fmt;
use std::path::PathBuf;

use crate::error::{OntologyError, OntologyResult};

/// Prefix marking an OBO library reference (`obo:pato`)
pub const LIBRARY_PREFIX: &str = "obo:";

/// Prefix marking a plain web URL
pub const WEB_PREFIX: &str = "http:";

/// Extension of the canonical interchange format (obographs JSON)
pub const CANONICAL_EXTENSION: &str = "json";

/// Source extensions the converter is known to handle
pub const KNOWN_SOURCE_EXTENSIONS: &[&str] = &["obo", "owl"];

/// A validated ontology handle
///
/// Any string except an empty or whitespace-only one is a valid handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    pub fn new(raw: &str) -> OntologyResult<Self> {
        if raw.trim().is_empty() {
            return Err(OntologyError::UnsupportedHandle {
                handle: raw.to_string(),
                reason: "handle is empty".to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the handle contains a `.` after its first character
    pub fn has_inner_dot(&self) -> bool {
        self.0.find('.').is_some_and(|i| i > 0)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a local file is brought into memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalFormat {
    /// Already obographs JSON; loaded directly
    Canonical,
    /// `.obo` / `.owl`; converted first
    Source,
    /// Unrecognised extension; conversion is attempted anyway
    Unrecognized,
}

impl LocalFormat {
    /// Infer the format from a file name's extension
    pub fn from_path_text(path: &str) -> Self {
        let ends_with = |ext: &str| {
            path.len() > ext.len()
                && path.ends_with(ext)
                && path.as_bytes()[path.len() - ext.len() - 1] == b'.'
        };
        if ends_with(CANONICAL_EXTENSION) {
            Self::Canonical
        } else if KNOWN_SOURCE_EXTENSIONS.iter().any(|ext| ends_with(ext)) {
            Self::Source
        } else {
            Self::Unrecognized
        }
    }

    pub fn needs_conversion(self) -> bool {
        self != Self::Canonical
    }
}

/// Acquisition strategy chosen for a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    LocalFile,
    Library,
    RemoteUrl,
    RemoteQuery,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::LocalFile => "local-file",
            Strategy::Library => "library",
            Strategy::RemoteUrl => "remote-url",
            Strategy::RemoteQuery => "remote-query",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleKind {
    /// An existing file on local storage
    LocalFile { path: PathBuf, format: LocalFormat },
    /// An OBO library reference
    ///
    /// `artifact_name` is the handle text with the default extension applied
    /// (`obo:pato.owl`); `remainder` is the part after the prefix
    /// (`pato.owl`), appended to the library base URL.
    Library {
        artifact_name: String,
        remainder: String,
    },
    /// A web URL converted and cached by digest
    RemoteUrl { url: String },
    /// A bare identifier handed to the remote query client
    RemoteQuery { id: String },
}

impl HandleKind {
    pub fn strategy(&self) -> Strategy {
        match self {
            HandleKind::LocalFile { .. } => Strategy::LocalFile,
            HandleKind::Library { .. } => Strategy::Library,
            HandleKind::RemoteUrl { .. } => Strategy::RemoteUrl,
            HandleKind::RemoteQuery { .. } => Strategy::RemoteQuery,
        }
    }
}
