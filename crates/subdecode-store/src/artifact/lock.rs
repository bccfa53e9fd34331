//! Per-key advisory locks
//!
//! Two runs against the same source must not interleave their
//! load → diff → save. Each key gets a `<key>.lock` sidecar file holding an
//! exclusive lock for the duration of that critical section. Different
//! keys never contend.

use crate::errors::lock_error;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use subdecode_core::{ArtifactKey, Result};

/// Held lock on one artifact key; released on drop
#[derive(Debug)]
pub struct KeyLock {
    path: PathBuf,
    file: File,
}

impl KeyLock {
    /// Block until the exclusive lock at `path` is acquired
    pub fn acquire(key: &ArtifactKey, path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| lock_error(key, e))?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| lock_error(key, e))?;

        file.lock_exclusive().map_err(|e| lock_error(key, e))?;
        tracing::debug!(artifact_key = key.as_str(), "artifact lock acquired");

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for KeyLock {
    fn drop(&mut self) {
        // closing the file also releases the lock
        let _ = FileExt::unlock(&self.file);
    }
}
