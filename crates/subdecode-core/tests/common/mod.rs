use std::cell::RefCell;
use std::collections::HashMap;

use subdecode_core::{
    AcquireError, Acquire, ArtifactKey, EntrySet, NotifyError, Notify, RawPayload, Result,
    Source, StateStore, SyncError,
};

/// Acquirer that returns fixed bytes for every source
#[allow(dead_code)]
pub struct StaticAcquirer {
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl StaticAcquirer {
    pub fn text(body: &str) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
        }
    }
}

impl Acquire for StaticAcquirer {
    fn acquire(&self, source: &Source) -> std::result::Result<RawPayload, AcquireError> {
        Ok(RawPayload::new(source.origin(), self.body.clone()))
    }
}

/// Acquirer that always fails with the given error
#[allow(dead_code)]
pub struct FailingAcquirer(pub AcquireError);

impl Acquire for FailingAcquirer {
    fn acquire(&self, _source: &Source) -> std::result::Result<RawPayload, AcquireError> {
        Err(self.0.clone())
    }
}

/// In-memory state store keyed by artifact key
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryStore {
    pub artifacts: RefCell<HashMap<String, String>>,
    pub saves: RefCell<usize>,
    pub fail_saves: bool,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn with_artifact(source_id: &str, text: &str) -> Self {
        let store = Self::default();
        store.artifacts.borrow_mut().insert(
            ArtifactKey::derive(source_id).as_str().to_string(),
            text.to_string(),
        );
        store
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn artifact(&self, source_id: &str) -> Option<String> {
        self.artifacts
            .borrow()
            .get(ArtifactKey::derive(source_id).as_str())
            .cloned()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl StateStore for MemoryStore {
    type Guard = ();

    fn lock(&self, _key: &ArtifactKey) -> Result<()> {
        Ok(())
    }

    fn load(&self, key: &ArtifactKey) -> EntrySet {
        self.artifacts
            .borrow()
            .get(key.as_str())
            .map(|text| EntrySet::normalize(text))
            .unwrap_or_default()
    }

    fn save(&self, key: &ArtifactKey, entries: &EntrySet) -> Result<()> {
        if self.fail_saves {
            return Err(SyncError::Persist {
                key: key.to_string(),
                op: "write_artifact_temp".to_string(),
                reason: "disk full".to_string(),
            });
        }
        *self.saves.borrow_mut() += 1;
        self.artifacts
            .borrow_mut()
            .insert(key.as_str().to_string(), entries.to_text());
        Ok(())
    }

    fn location(&self, key: &ArtifactKey) -> String {
        format!("memory://{}", key)
    }
}

/// Notifier that records what it was given
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingNotifier {
    pub received: RefCell<Vec<String>>,
}

impl Notify for RecordingNotifier {
    fn notify(&self, text: &str) -> std::result::Result<(), NotifyError> {
        self.received.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Notifier whose clipboard is never available
#[allow(dead_code)]
pub struct UnavailableNotifier;

impl Notify for UnavailableNotifier {
    fn notify(&self, _text: &str) -> std::result::Result<(), NotifyError> {
        Err(NotifyError::Unavailable {
            reason: "no display".to_string(),
        })
    }
}
