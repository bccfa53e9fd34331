//! Artifact storage
//!
//! Provides:
//! - `<root>/<key>.txt` artifacts holding newline-joined entries
//! - Atomic writes via temp→rename
//! - `<root>/<key>.lock` advisory lock files

mod atomic;
mod fs_store;
mod lock;

pub use fs_store::{FsStateStore, ARTIFACT_EXTENSION};
pub use lock::KeyLock;
