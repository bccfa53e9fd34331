//! SubDecode Core - fetch, normalize, diff, persist
//!
//! This crate provides the synchronization kernel for SubDecode:
//! - Transport encoding detection (URL-safe base64 or plain text)
//! - Normalization of raw text into an ordered, deduplicated entry set
//! - Set-membership diffing of two entry sets
//! - Deterministic artifact key derivation from a source identifier
//! - The pipeline orchestrator and the collaborator traits it drives
//! - Error and logging facilities shared by the other crates
//!
//! Acquisition, persistence and clipboard notification live behind the
//! [`Acquire`], [`StateStore`] and [`Notify`] traits.

pub mod diff;
pub mod encoding;
pub mod entry;
pub mod errors;
pub mod key;
pub mod logging_facility;
pub mod pipeline;
pub mod source;

pub use subdecode_core_types as core_types;

// Re-export commonly used types
pub use diff::{compute_diff, DiffResult};
pub use encoding::SourceEncoding;
pub use entry::EntrySet;
pub use errors::{AcquireError, ExError, ExErrorKind, NotifyError, Result, SyncError};
pub use key::ArtifactKey;
pub use pipeline::{
    Acquire, EmptySourcePolicy, NoopNotifier, Notify, Pipeline, PipelineConfig, PipelineState,
    RunOutcome, RunReport, StateStore,
};
pub use source::{Origin, RawPayload, Source};
