//! SubDecode Store - filesystem persistence for entry sets
//!
//! Provides:
//! - One UTF-8 text artifact per source under a fixed output directory
//! - Atomic overwrite (temp file, fsync, rename)
//! - Per-key advisory locks serializing load → diff → save

pub mod artifact;
pub mod errors;

// Re-export key types
pub use artifact::{FsStateStore, KeyLock, ARTIFACT_EXTENSION};
