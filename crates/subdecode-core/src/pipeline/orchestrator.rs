//! The orchestrator.
//!
//! ## Logging boundary
//!
//! - `log_op_start!` at entry of [`Pipeline::run`]
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Transitions and intermediate results are logged at debug level.

use std::time::Instant;

use crate::diff::compute_diff;
use crate::encoding;
use crate::entry::EntrySet;
use crate::errors::{Result, SyncError};
use crate::key::ArtifactKey;
use crate::pipeline::config::{EmptySourcePolicy, PipelineConfig};
use crate::pipeline::report::{RunOutcome, RunReport};
use crate::pipeline::state::{PipelineState, StateTrace};
use crate::pipeline::traits::{Acquire, Notify, StateStore};
use crate::source::Source;
use crate::{log_op_end, log_op_error, log_op_start};
use subdecode_core_types::RunId;

/// One-way sync of a single source into its artifact
pub struct Pipeline<'a, S: StateStore> {
    acquirer: &'a dyn Acquire,
    store: &'a S,
    notifier: &'a dyn Notify,
    config: PipelineConfig,
}

impl<'a, S: StateStore> Pipeline<'a, S> {
    pub fn new(acquirer: &'a dyn Acquire, store: &'a S, notifier: &'a dyn Notify) -> Self {
        Self {
            acquirer,
            store,
            notifier,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the pipeline for `source`
    ///
    /// ## Errors
    ///
    /// - `SyncError::Acquire`: fetch or file read failed; nothing was touched
    /// - `SyncError::Lock`: the artifact key is locked by another run and
    ///   the lock could not be taken
    /// - `SyncError::EmptySource`: the source yielded nothing while the
    ///   artifact holds entries, under [`EmptySourcePolicy::Refuse`]
    /// - `SyncError::Persist`: the artifact write failed; the previous
    ///   artifact is intact
    pub fn run(&self, source: &Source) -> Result<RunReport> {
        let run_id = RunId::new();
        log_op_start!(
            "sync_run",
            run_id = %run_id,
            source_id = source.id(),
            origin = source.origin().label()
        );
        let start = Instant::now();

        let report = self.run_impl(run_id, source).map_err(|e| {
            log_op_error!(
                "sync_run",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                source_id = source.id()
            );
            e
        })?;

        log_op_end!(
            "sync_run",
            duration_ms = start.elapsed().as_millis() as u64,
            source_id = source.id(),
            added = report.diff.added as u64,
            unchanged = report.diff.unchanged as u64,
            removed = report.diff.removed as u64,
            updated = report.outcome == RunOutcome::Updated
        );

        Ok(report)
    }

    fn run_impl(&self, run_id: RunId, source: &Source) -> Result<RunReport> {
        let mut trace = StateTrace::new();

        trace.advance(PipelineState::Fetching);
        let payload = self.acquirer.acquire(source).map_err(|e| {
            trace.fail(e.to_string());
            SyncError::from(e)
        })?;

        trace.advance(PipelineState::Classifying);
        let classified = encoding::classify(&payload.text());
        tracing::debug!(
            source_id = source.id(),
            encoding = classified.encoding.label(),
            bytes = payload.bytes.len() as u64,
            "payload classified"
        );
        drop(payload);

        trace.advance(PipelineState::Normalizing);
        let entries = EntrySet::normalize(&classified.text);

        trace.advance(PipelineState::LoadingPrior);
        let key = ArtifactKey::derive(source.id());
        let guard = self.store.lock(&key).map_err(|e| {
            trace.fail(e.to_string());
            e
        })?;
        let prior = self.store.load(&key);

        trace.advance(PipelineState::Diffing);
        let diff = compute_diff(&prior, &entries);
        tracing::debug!(
            artifact_key = key.as_str(),
            prior = prior.len() as u64,
            new = entries.len() as u64,
            added = diff.added as u64,
            removed = diff.removed as u64,
            "entry sets compared"
        );

        trace.advance(PipelineState::Deciding);
        let outcome = if diff.is_noop() {
            trace.advance(PipelineState::Skipping);
            RunOutcome::UpToDate
        } else if entries.is_empty()
            && self.config.empty_source_policy == EmptySourcePolicy::Refuse
        {
            let err = SyncError::EmptySource {
                source_id: source.id().to_string(),
                prior: prior.len(),
            };
            trace.fail(err.to_string());
            return Err(err);
        } else {
            trace.advance(PipelineState::Persisting);
            self.store.save(&key, &entries).map_err(|e| {
                trace.fail(e.to_string());
                e
            })?;
            RunOutcome::Updated
        };
        drop(guard);

        trace.advance(PipelineState::Notifying);
        let notified = match outcome {
            RunOutcome::Updated => self.notify(&entries),
            RunOutcome::UpToDate => false,
        };

        trace.advance(PipelineState::Done);

        Ok(RunReport {
            run_id,
            source_id: source.id().to_string(),
            origin: source.origin(),
            encoding: classified.encoding,
            artifact_location: self.store.location(&key),
            artifact_key: key,
            entries: entries.len(),
            diff,
            outcome,
            notified,
            states: trace,
        })
    }

    fn notify(&self, entries: &EntrySet) -> bool {
        match self.notifier.notify(&entries.to_text()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "notification failed; continuing");
                false
            }
        }
    }
}
