#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{
    FailingAcquirer, MemoryStore, RecordingNotifier, StaticAcquirer, UnavailableNotifier,
};
use subdecode_core::encoding::encode;
use subdecode_core::{
    AcquireError, DiffResult, EmptySourcePolicy, NoopNotifier, Pipeline, PipelineConfig,
    PipelineState, RunOutcome, Source, SourceEncoding, SyncError,
};

const URL: &str = "https://example.com/sub";

#[test]
fn test_plain_update_overwrites_artifact() {
    // Prior ["a","b"], plain fetch "b\nc\nc\n"
    let store = MemoryStore::with_artifact(URL, "a\nb");
    let acquirer = StaticAcquirer::text("b\nc\nc\n");
    let notifier = RecordingNotifier::default();

    let report = Pipeline::new(&acquirer, &store, &notifier)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(report.encoding, SourceEncoding::Plain);
    assert_eq!(
        report.diff,
        DiffResult {
            added: 1,
            unchanged: 1,
            removed: 1
        }
    );
    assert_eq!(report.outcome, RunOutcome::Updated);
    assert_eq!(report.entries, 2);
    assert_eq!(store.artifact(URL).as_deref(), Some("b\nc"));
    assert_eq!(notifier.received.borrow().as_slice(), ["b\nc"]);
    assert!(report.notified);
}

#[test]
fn test_encoded_first_run_creates_artifact() {
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text(&encode("x\ny\n"));

    let report = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(report.encoding, SourceEncoding::Base64);
    assert_eq!(
        report.diff,
        DiffResult {
            added: 2,
            unchanged: 0,
            removed: 0
        }
    );
    assert_eq!(store.artifact(URL).as_deref(), Some("x\ny"));
}

#[test]
fn test_unchanged_source_skips_persistence() {
    let store = MemoryStore::with_artifact(URL, "a\nb");
    let acquirer = StaticAcquirer::text("b\n a \nb\n");
    let notifier = RecordingNotifier::default();

    let report = Pipeline::new(&acquirer, &store, &notifier)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::UpToDate);
    assert_eq!(report.diff.unchanged, 2);
    assert_eq!(store.save_count(), 0);
    assert!(notifier.received.borrow().is_empty());
    assert!(!report.notified);
    assert!(report.states.contains(&PipelineState::Skipping));
    assert!(!report.states.contains(&PipelineState::Persisting));
    // prior text left byte-for-byte alone
    assert_eq!(store.artifact(URL).as_deref(), Some("a\nb"));
}

#[test]
fn test_second_run_is_idempotent() {
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text("x\ny\nx\n");
    let pipeline = Pipeline::new(&acquirer, &store, &NoopNotifier);

    let first = pipeline.run(&Source::remote(URL)).unwrap();
    let second = pipeline.run(&Source::remote(URL)).unwrap();

    assert_eq!(first.outcome, RunOutcome::Updated);
    assert_eq!(second.outcome, RunOutcome::UpToDate);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_acquisition_failure_leaves_artifact_untouched() {
    let store = MemoryStore::with_artifact(URL, "a\nb");
    let acquirer = FailingAcquirer(AcquireError::Timeout {
        source_id: URL.to_string(),
    });

    let err = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&Source::remote(URL))
        .unwrap_err();

    assert!(matches!(
        err,
        SyncError::Acquire(AcquireError::Timeout { .. })
    ));
    assert_eq!(store.save_count(), 0);
    assert_eq!(store.artifact(URL).as_deref(), Some("a\nb"));
}

#[test]
fn test_persist_failure_is_fatal() {
    let store = MemoryStore::failing();
    let acquirer = StaticAcquirer::text("x\n");
    let notifier = RecordingNotifier::default();

    let err = Pipeline::new(&acquirer, &store, &notifier)
        .run(&Source::remote(URL))
        .unwrap_err();

    assert!(matches!(err, SyncError::Persist { .. }));
    assert!(notifier.received.borrow().is_empty());
}

#[test]
fn test_notifier_failure_is_not_fatal() {
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text("x\n");

    let report = Pipeline::new(&acquirer, &store, &UnavailableNotifier)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::Updated);
    assert!(!report.notified);
    assert_eq!(store.artifact(URL).as_deref(), Some("x"));
    assert_eq!(report.states.current(), &PipelineState::Done);
}

#[test]
fn test_empty_source_refused_by_default() {
    let store = MemoryStore::with_artifact(URL, "a\nb");
    let acquirer = StaticAcquirer::text("  \n\n");

    let err = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&Source::remote(URL))
        .unwrap_err();

    assert_eq!(
        err,
        SyncError::EmptySource {
            source_id: URL.to_string(),
            prior: 2
        }
    );
    assert_eq!(store.artifact(URL).as_deref(), Some("a\nb"));
}

#[test]
fn test_empty_source_overwrites_when_allowed() {
    let store = MemoryStore::with_artifact(URL, "a\nb");
    let acquirer = StaticAcquirer::text("");
    let config = PipelineConfig::default().with_empty_source_policy(EmptySourcePolicy::Overwrite);

    let report = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .with_config(config)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(report.diff.removed, 2);
    assert_eq!(report.outcome, RunOutcome::Updated);
    assert_eq!(store.artifact(URL).as_deref(), Some(""));
}

#[test]
fn test_empty_source_without_prior_is_noop() {
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text("\n");

    let report = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::UpToDate);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_local_file_payload_is_classified_too() {
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text(&encode("ss://one\nss://two"));
    let source = Source::local_file("subs/list.b64");

    let report = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&source)
        .unwrap();

    assert_eq!(report.encoding, SourceEncoding::Base64);
    assert_eq!(
        store.artifact("subs/list.b64").as_deref(),
        Some("ss://one\nss://two")
    );
}

#[test]
fn test_state_trace_for_update_run() {
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text("x");

    let report = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(
        report.states.visited(),
        [
            PipelineState::Idle,
            PipelineState::Fetching,
            PipelineState::Classifying,
            PipelineState::Normalizing,
            PipelineState::LoadingPrior,
            PipelineState::Diffing,
            PipelineState::Deciding,
            PipelineState::Persisting,
            PipelineState::Notifying,
            PipelineState::Done,
        ]
    );
}

#[test]
fn test_short_plain_list_is_not_decoded() {
    // "a" and "b" join to valid base64 only when the line break is ignored
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text("a\nb");

    let report = Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&Source::remote(URL))
        .unwrap();

    assert_eq!(report.encoding, SourceEncoding::Plain);
    assert_eq!(report.diff.added, 2);
    assert_eq!(store.artifact(URL).as_deref(), Some("a\nb"));
}
