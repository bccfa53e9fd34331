//! Result of a successful run.

use crate::diff::DiffResult;
use crate::encoding::SourceEncoding;
use crate::key::ArtifactKey;
use crate::pipeline::state::StateTrace;
use crate::source::Origin;
use serde::Serialize;
use subdecode_core_types::RunId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The artifact was written
    Updated,
    /// Nothing added or removed; the artifact was left alone
    UpToDate,
}

/// Everything the caller needs to report one run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub source_id: String,
    pub origin: Origin,
    pub encoding: SourceEncoding,
    pub artifact_key: ArtifactKey,
    pub artifact_location: String,
    /// Size of the new entry set
    pub entries: usize,
    pub diff: DiffResult,
    pub outcome: RunOutcome,
    /// Whether the notifier ran and succeeded
    pub notified: bool,
    pub states: StateTrace,
}
