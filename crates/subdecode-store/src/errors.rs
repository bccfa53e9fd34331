//! Error helpers for subdecode-store
//!
//! Wraps IO failures into the core's `SyncError` with the failing step
//! recorded as the operation.

use subdecode_core::errors::SyncError;
use subdecode_core::ArtifactKey;

/// Create a persistence error for `key` from an IO error
pub fn io_error(operation: &str, key: &ArtifactKey, err: std::io::Error) -> SyncError {
    SyncError::Persist {
        key: key.to_string(),
        op: operation.to_string(),
        reason: err.to_string(),
    }
}

/// Create a lock error for `key` from an IO error
pub fn lock_error(key: &ArtifactKey, err: std::io::Error) -> SyncError {
    SyncError::Lock {
        key: key.to_string(),
        reason: err.to_string(),
    }
}
