//! Handle classification
//!
//! Rules are evaluated in order and the first one that accepts the handle
//! decides the strategy. Order is precedence: a file literally named
//! `obo:pato.json` is a local file, not a library reference.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{
    Handle, HandleKind, LocalFormat, Strategy, LIBRARY_PREFIX, WEB_PREFIX,
};

/// A single classification rule
///
/// `is_file` answers whether a path names an existing regular file; it is
/// injected so classification stays free of direct filesystem access.
pub struct ClassificationRule {
    pub strategy: Strategy,
    pub description: &'static str,
    matches: fn(&Handle, &ClassifierSettings, &dyn Fn(&Path) -> bool) -> Option<HandleKind>,
}

/// Knobs the rules depend on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierSettings {
    /// Extension appended to library handles that have none (`owl`)
    pub default_extension: String,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            default_extension: "owl".to_string(),
        }
    }
}

/// The dispatch table, highest precedence first
pub const RULES: [ClassificationRule; 4] = [
    ClassificationRule {
        strategy: Strategy::LocalFile,
        description: "contains '.' and names an existing file",
        matches: local_file,
    },
    ClassificationRule {
        strategy: Strategy::Library,
        description: "starts with 'obo:'",
        matches: library,
    },
    ClassificationRule {
        strategy: Strategy::RemoteUrl,
        description: "starts with 'http:'",
        matches: remote_url,
    },
    ClassificationRule {
        strategy: Strategy::RemoteQuery,
        description: "any other identifier",
        matches: remote_query,
    },
];

/// Classify a handle with the default rule table
///
/// The last rule accepts every valid handle, so classification of a
/// [`Handle`] never fails; invalid strings are rejected by `Handle::new`.
pub fn classify(
    handle: &Handle,
    settings: &ClassifierSettings,
    is_file: &dyn Fn(&Path) -> bool,
) -> HandleKind {
    classify_with(&RULES, handle, settings, is_file)
        .unwrap_or_else(|| HandleKind::RemoteQuery {
            id: handle.as_str().to_string(),
        })
}

/// Classify against an explicit rule list
pub fn classify_with(
    rules: &[ClassificationRule],
    handle: &Handle,
    settings: &ClassifierSettings,
    is_file: &dyn Fn(&Path) -> bool,
) -> Option<HandleKind> {
    rules
        .iter()
        .find_map(|rule| (rule.matches)(handle, settings, is_file))
}

fn local_file(
    handle: &Handle,
    _settings: &ClassifierSettings,
    is_file: &dyn Fn(&Path) -> bool,
) -> Option<HandleKind> {
    if !handle.has_inner_dot() {
        return None;
    }
    let path = PathBuf::from(handle.as_str());
    if !is_file(&path) {
        return None;
    }
    Some(HandleKind::LocalFile {
        format: LocalFormat::from_path_text(handle.as_str()),
        path,
    })
}

fn library(
    handle: &Handle,
    settings: &ClassifierSettings,
    _is_file: &dyn Fn(&Path) -> bool,
) -> Option<HandleKind> {
    let text = handle.as_str();
    let remainder = text.strip_prefix(LIBRARY_PREFIX)?;
    let (artifact_name, remainder) = if text.contains('.') {
        (text.to_string(), remainder.to_string())
    } else {
        let ext = settings.default_extension.trim_start_matches('.');
        (format!("{}.{}", text, ext), format!("{}.{}", remainder, ext))
    };
    Some(HandleKind::Library {
        artifact_name,
        remainder,
    })
}

fn remote_url(
    handle: &Handle,
    _settings: &ClassifierSettings,
    _is_file: &dyn Fn(&Path) -> bool,
) -> Option<HandleKind> {
    handle
        .as_str()
        .starts_with(WEB_PREFIX)
        .then(|| HandleKind::RemoteUrl {
            url: handle.as_str().to_string(),
        })
}

fn remote_query(
    handle: &Handle,
    _settings: &ClassifierSettings,
    _is_file: &dyn Fn(&Path) -> bool,
) -> Option<HandleKind> {
    Some(HandleKind::RemoteQuery {
        id: handle.as_str().to_string(),
    })
}
