//! Collaborator traits consumed by the orchestrator.

use crate::entry::EntrySet;
use crate::errors::{AcquireError, NotifyError, Result};
use crate::key::ArtifactKey;
use crate::source::{RawPayload, Source};

/// Acquisition collaborator: network fetch or file read
///
/// Implementations own timeouts, proxies and any retry policy. Errors are
/// terminal for the run.
pub trait Acquire {
    /// Fetch the raw payload for `source`
    ///
    /// # Errors
    ///
    /// One of the closed [`AcquireError`] kinds.
    fn acquire(&self, source: &Source) -> std::result::Result<RawPayload, AcquireError>;
}

/// Exclusive owner of persisted entry sets
pub trait StateStore {
    /// Held across load → diff → save for one key
    type Guard;

    /// Serialize access to `key` against concurrent runs
    ///
    /// # Errors
    ///
    /// `SyncError::Lock` when the lock cannot be taken.
    fn lock(&self, key: &ArtifactKey) -> Result<Self::Guard>;

    /// Previously persisted entries; absent or unreadable state is empty
    fn load(&self, key: &ArtifactKey) -> EntrySet;

    /// Replace the artifact for `key` with `entries`
    ///
    /// Either the old or the new content stays readable, never a mixture.
    ///
    /// # Errors
    ///
    /// `SyncError::Persist` when the write fails.
    fn save(&self, key: &ArtifactKey, entries: &EntrySet) -> Result<()>;

    /// Human-readable location of the artifact (for reporting)
    fn location(&self, key: &ArtifactKey) -> String;
}

/// Best-effort side effect invoked after a successful persist
pub trait Notify {
    /// Publish the persisted text (clipboard)
    ///
    /// # Errors
    ///
    /// Any [`NotifyError`]; the orchestrator logs it and carries on.
    fn notify(&self, text: &str) -> std::result::Result<(), NotifyError>;
}

/// Notifier that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notify for NoopNotifier {
    fn notify(&self, _text: &str) -> std::result::Result<(), NotifyError> {
        Ok(())
    }
}
