//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OntologyError, OntologyResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "ontofactory.toml";

/// Non-fatal configuration warning (e.g. an unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> OntologyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OntologyError::NotFound {
            path: path.to_path_buf(),
        },
        _ => OntologyError::Io(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| OntologyError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                log_warnings(&warnings);
                tracing::debug!(path = %path.display(), "loaded configuration");
                return with_env_overrides(config);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            }
        }
    }

    with_env_overrides(Config::default())
}

/// `<config-dir>/ontofactory/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ontofactory").join("config.toml"))
}

/// Apply environment variable overrides (ONTOFACTORY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("ONTOFACTORY_CACHE_DIR").filter(|v| !v.is_empty()) {
        config.cache.root = PathBuf::from(dir);
    }

    if let Some(program) = lookup("ONTOFACTORY_CONVERTER").filter(|v| !v.is_empty()) {
        config.converter.program = program;
    }

    if let Some(raw) = lookup("ONTOFACTORY_CONVERTER_TIMEOUT") {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.converter.timeout_secs = Some(secs),
            Err(_) => tracing::warn!(
                value = %raw,
                "invalid ONTOFACTORY_CONVERTER_TIMEOUT (expected whole seconds), ignoring"
            ),
        }
    }

    if let Some(handle) = lookup("ONTOFACTORY_DEFAULT_HANDLE").filter(|v| !v.is_empty()) {
        config.defaults.handle = handle;
    }

    if let Some(url) = lookup("ONTOFACTORY_LIBRARY_BASE_URL").filter(|v| !v.is_empty()) {
        config.library.base_url = url;
    }

    if let Some(endpoint) = lookup("ONTOFACTORY_REMOTE_ENDPOINT").filter(|v| !v.is_empty()) {
        config.remote.endpoint = endpoint;
    }

    config
}

pub fn log_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key, did you mean '{}'?",
                suggestion
            ),
            None => tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key"
            ),
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cache",
        "root",
        "cross_process_lock",
        "converter",
        "program",
        "args",
        "timeout_secs",
        "library",
        "base_url",
        "default_extension",
        "remote",
        "endpoint",
        "defaults",
        "handle",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
