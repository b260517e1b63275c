//! Conversion Cache
//!
//! Converted artifacts live directly under the cache root:
//! `<root>/<sha256-of-locator>` for URLs and local source files,
//! `<root>/<handle-with-extension>` for library handles.
//!
//! Presence at the path is validity. There is no content check, no
//! freshness check and no eviction.
//!
//! Concurrent first access is serialised per artifact by an in-process lock
//! table and, across processes, by an `fs2` advisory lock on a file under
//! `<root>/.ontofactory-locks/`. The converter writes into a staging
//! directory inside the root and the result is renamed into place, so a
//! reader never observes a partially written artifact.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

use fs2::FileExt;

use crate::domain::ports::Converter;
use crate::domain::value_objects::{CacheKey, LIBRARY_PREFIX};
use crate::error::{OntologyError, OntologyResult};

/// Directory (under the root) holding cross-process lock files
pub const LOCK_DIR: &str = ".ontofactory-locks";

const STAGING_PREFIX: &str = ".ontofactory-staging-";

const STAGED_FALLBACK: &str = "artifact";

/// Whether a lookup was served from disk or required a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Converted,
}

/// An artifact found in the cache root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedArtifact {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
    /// Set when the name is a digest key (URL or local source artifact)
    pub key: Option<CacheKey>,
}

pub struct ConversionCache<C: Converter> {
    root: PathBuf,
    converter: C,
    cross_process_lock: bool,
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<C: Converter> ConversionCache<C> {
    pub fn new(root: impl Into<PathBuf>, converter: C) -> Self {
        Self {
            root: root.into(),
            converter,
            cross_process_lock: true,
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Enable or disable the advisory lock shared with other processes
    pub fn with_cross_process_lock(mut self, enabled: bool) -> Self {
        self.cross_process_lock = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Path where the artifact named `artifact_name` lives
    pub fn artifact_path(&self, artifact_name: &str) -> PathBuf {
        self.root.join(artifact_name)
    }

    /// Path of the digest-named artifact for `key`
    pub fn key_path(&self, key: &CacheKey) -> PathBuf {
        self.artifact_path(key.as_str())
    }

    pub fn contains(&self, artifact_name: &str) -> bool {
        self.artifact_path(artifact_name).is_file()
    }

    /// Return the artifact for `artifact_name`, converting `source` on a miss
    pub fn get_or_convert(&self, source: &str, artifact_name: &str) -> OntologyResult<PathBuf> {
        self.lookup(source, artifact_name).map(|(path, _)| path)
    }

    /// Like [`get_or_convert`](Self::get_or_convert), also reporting whether
    /// the converter ran
    pub fn lookup(
        &self,
        source: &str,
        artifact_name: &str,
    ) -> OntologyResult<(PathBuf, CacheOutcome)> {
        let path = self.artifact_path(artifact_name);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "using cached artifact");
            return Ok((path, CacheOutcome::Hit));
        }

        let key_lock = self.key_lock(artifact_name);
        let result = {
            let _in_process = key_lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.convert_if_missing(source, artifact_name, path)
        };
        self.release_key_lock(artifact_name, key_lock);
        result
    }

    /// List artifacts this cache could have produced
    ///
    /// The root is usually the shared temp directory, so only digest-named
    /// files and library artifacts are reported. Library handles with a `/`
    /// in their name live in subdirectories and are listed by that name.
    pub fn list(&self) -> OntologyResult<Vec<CachedArtifact>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut artifacts = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            let key = CacheKey::parse(&name);
            if key.is_none() && !name.starts_with(LIBRARY_PREFIX) {
                continue;
            }
            let metadata = entry.metadata()?;
            if metadata.is_dir() && key.is_none() {
                collect_nested(&entry.path(), &name, &mut artifacts)?;
            } else if metadata.is_file() {
                artifacts.push(CachedArtifact::from_metadata(name, entry.path(), &metadata, key));
            }
        }
        artifacts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(artifacts)
    }

    fn convert_if_missing(
        &self,
        source: &str,
        artifact_name: &str,
        path: PathBuf,
    ) -> OntologyResult<(PathBuf, CacheOutcome)> {
        let _cross_process = self.lock_across_processes(artifact_name)?;

        // Another caller may have finished the conversion while we waited
        if path.is_file() {
            tracing::debug!(path = %path.display(), "artifact converted by concurrent caller");
            return Ok((path, CacheOutcome::Hit));
        }

        tracing::info!(
            source,
            artifact = artifact_name,
            converter = self.converter.name(),
            "cache miss, converting"
        );
        self.convert_into_place(source, &path)?;
        Ok((path, CacheOutcome::Converted))
    }

    fn convert_into_place(&self, source: &str, path: &Path) -> OntologyResult<()> {
        let parent = path.parent().unwrap_or(self.root.as_path());
        fs::create_dir_all(parent)?;

        // Dropping the staging dir removes whatever a failed run left behind
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.root)?;
        let staged = staging
            .path()
            .join(path.file_name().unwrap_or(OsStr::new(STAGED_FALLBACK)));

        self.converter.convert(source, &staged)?;

        if !staged.is_file() {
            return Err(OntologyError::NotFound { path: staged });
        }
        fs::rename(&staged, path)?;
        tracing::debug!(path = %path.display(), "artifact stored");
        Ok(())
    }

    fn key_lock(&self, artifact_name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.key_locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(artifact_name.to_string()).or_default())
    }

    /// Drop the table entry once no other caller holds or waits on it
    fn release_key_lock(&self, artifact_name: &str, key_lock: Arc<Mutex<()>>) {
        let mut locks = self.key_locks.lock().unwrap_or_else(PoisonError::into_inner);
        // One reference in the table, one here
        if Arc::strong_count(&key_lock) == 2 {
            locks.remove(artifact_name);
        }
    }

    /// Lock file for `artifact_name`, flat under the lock directory
    fn lock_path(&self, artifact_name: &str) -> PathBuf {
        let key = CacheKey::from_locator(artifact_name);
        self.root.join(LOCK_DIR).join(format!("{}.lock", key))
    }

    fn lock_across_processes(&self, artifact_name: &str) -> OntologyResult<Option<FileLock>> {
        if !self.cross_process_lock {
            return Ok(None);
        }
        let lock_path = self.lock_path(artifact_name);
        fs::create_dir_all(self.root.join(LOCK_DIR))?;

        let file = File::create(&lock_path)?;
        file.lock_exclusive()?;
        Ok(Some(FileLock(file)))
    }
}

impl CachedArtifact {
    fn from_metadata(
        name: String,
        path: PathBuf,
        metadata: &fs::Metadata,
        key: Option<CacheKey>,
    ) -> Self {
        Self {
            name,
            path,
            size: metadata.len(),
            modified: metadata.modified().ok(),
            key,
        }
    }
}

/// Collect files below a library subdirectory, naming them `<prefix>/<rest>`
fn collect_nested(dir: &Path, prefix: &str, out: &mut Vec<CachedArtifact>) -> OntologyResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = format!("{}/{}", prefix, entry.file_name().to_string_lossy());
        let metadata = entry.metadata()?;
        if metadata.is_dir() {
            collect_nested(&entry.path(), &name, out)?;
        } else if metadata.is_file() {
            out.push(CachedArtifact::from_metadata(name, entry.path(), &metadata, None));
        }
    }
    Ok(())
}

/// Advisory lock released on drop
struct FileLock(File);

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = self.0.unlock();
    }
}
