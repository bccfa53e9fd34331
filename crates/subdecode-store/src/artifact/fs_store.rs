//! Filesystem-backed state store
//!
//! One artifact per source key: `<root>/<key>.txt`, UTF-8, entries joined
//! by `\n` with no trailing newline and no metadata.

use crate::artifact::atomic::atomic_write;
use crate::artifact::lock::KeyLock;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use subdecode_core::{ArtifactKey, EntrySet, Result, StateStore};

/// File extension of persisted artifacts
pub const ARTIFACT_EXTENSION: &str = "txt";

const LOCK_EXTENSION: &str = "lock";

/// State store rooted at an output directory
#[derive(Debug, Clone)]
pub struct FsStateStore {
    root: PathBuf,
}

impl FsStateStore {
    /// Create a store writing under `root`; the directory is created on first save
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Path of the artifact for `key`
    pub fn artifact_path(&self, key: &ArtifactKey) -> PathBuf {
        self.root
            .join(format!("{}.{}", key.as_str(), ARTIFACT_EXTENSION))
    }

    fn lock_path(&self, key: &ArtifactKey) -> PathBuf {
        self.root.join(format!("{}.{}", key.as_str(), LOCK_EXTENSION))
    }
}

impl StateStore for FsStateStore {
    type Guard = KeyLock;

    fn lock(&self, key: &ArtifactKey) -> Result<KeyLock> {
        KeyLock::acquire(key, &self.lock_path(key))
    }

    fn load(&self, key: &ArtifactKey) -> EntrySet {
        let path = self.artifact_path(key);
        match fs::read(&path) {
            Ok(bytes) => EntrySet::normalize(&String::from_utf8_lossy(&bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(artifact_key = key.as_str(), "no prior artifact");
                EntrySet::empty()
            }
            Err(e) => {
                tracing::warn!(
                    artifact_key = key.as_str(),
                    path = %path.display(),
                    error = %e,
                    "prior artifact unreadable; treating as empty"
                );
                EntrySet::empty()
            }
        }
    }

    fn save(&self, key: &ArtifactKey, entries: &EntrySet) -> Result<()> {
        let path = self.artifact_path(key);
        atomic_write(key, &path, entries.to_text().as_bytes())?;
        tracing::debug!(
            artifact_key = key.as_str(),
            entries = entries.len() as u64,
            path = %path.display(),
            "artifact saved"
        );
        Ok(())
    }

    fn location(&self, key: &ArtifactKey) -> String {
        self.artifact_path(key).display().to_string()
    }
}
