use subdecode_core::errors::{AcquireError, ExError, ExErrorKind, NotifyError, SyncError};

#[test]
fn test_acquire_kinds_are_distinct() {
    let cases = [
        (
            AcquireError::Timeout {
                source_id: "u".to_string(),
            },
            ExErrorKind::Timeout,
        ),
        (
            AcquireError::Connection {
                source_id: "u".to_string(),
                reason: "r".to_string(),
            },
            ExErrorKind::Connection,
        ),
        (
            AcquireError::InvalidUrl {
                source_id: "u".to_string(),
                reason: "r".to_string(),
            },
            ExErrorKind::InvalidUrl,
        ),
        (
            AcquireError::NotFound {
                path: "p".to_string(),
            },
            ExErrorKind::NotFound,
        ),
        (
            AcquireError::UnrecognizedSource {
                input: "??".to_string(),
            },
            ExErrorKind::UnrecognizedSource,
        ),
    ];

    for (err, kind) in cases {
        assert_eq!(err.kind(), kind);
        let ex_err: ExError = SyncError::from(err).into();
        assert_eq!(ex_err.kind(), kind);
        assert_eq!(ex_err.op(), Some("acquire"));
    }
}

#[test]
fn test_persist_maps_to_persistence() {
    let ex_err: ExError = SyncError::Persist {
        key: "example.com_sub-1234abcd".to_string(),
        op: "rename_artifact_temp".to_string(),
        reason: "permission denied".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::Persistence);
    assert_eq!(ex_err.code(), "ERR_PERSISTENCE");
    assert_eq!(ex_err.op(), Some("rename_artifact_temp"));
    assert_eq!(ex_err.source_id(), Some("example.com_sub-1234abcd"));
}

#[test]
fn test_empty_source_message_names_prior_count() {
    let err = SyncError::EmptySource {
        source_id: "https://example.com/sub".to_string(),
        prior: 12,
    };
    assert!(err.to_string().contains("12"));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::EmptySource);
}

#[test]
fn test_notify_error_maps_to_notify_kind() {
    let ex_err: ExError = NotifyError::Unavailable {
        reason: "no display".to_string(),
    }
    .into();
    assert_eq!(ex_err.kind(), ExErrorKind::Notify);
    assert!(ex_err.message().contains("no display"));
}

#[test]
fn test_acquire_messages_are_human_readable() {
    let err = AcquireError::UnrecognizedSource {
        input: "not-a-thing".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Input is neither a valid URL nor an existing file: not-a-thing"
    );
}
