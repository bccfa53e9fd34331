//! Atomic write primitives
//!
//! Uses temp→rename so a reader sees either the old or the new artifact.

use crate::errors::io_error;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use subdecode_core::{ArtifactKey, Result};

/// Atomically replace `target_path` with `content`
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem. A failed write removes the temp file and leaves the target
/// untouched.
pub fn atomic_write(key: &ArtifactKey, target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_output_dir", key, e))?;
    }

    let temp_path = target_path.with_extension("tmp");

    if let Err(e) = write_synced(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("write_artifact_temp", key, e));
    }

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_artifact_temp", key, e));
    }

    Ok(())
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
