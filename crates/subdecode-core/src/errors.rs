use thiserror::Error;

/// Result type alias using SyncError
pub type Result<T> = std::result::Result<T, SyncError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure a run can surface maps onto exactly one kind, and every
/// kind maps to a stable `ERR_*` code used in logs and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Acquisition
    UnrecognizedSource,
    InvalidUrl,
    InvalidProxy,
    NotFound,
    Timeout,
    Connection,
    HttpStatus,

    // Decision
    EmptySource,

    // Persistence
    Io,
    Persistence,
    Concurrency,

    // Side effects
    Notify,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnrecognizedSource => "ERR_UNRECOGNIZED_SOURCE",
            ExErrorKind::InvalidUrl => "ERR_INVALID_URL",
            ExErrorKind::InvalidProxy => "ERR_INVALID_PROXY",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Connection => "ERR_CONNECTION",
            ExErrorKind::HttpStatus => "ERR_HTTP_STATUS",
            ExErrorKind::EmptySource => "ERR_EMPTY_SOURCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Notify => "ERR_NOTIFY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for humans. The logging macros convert every error into this shape.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    source_id: Option<String>,
    status: Option<u16>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            source_id: None,
            status: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add source identifier context (URL, path or artifact key)
    pub fn with_source_id(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    /// Add HTTP status context
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the source identifier context, if any
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Get the HTTP status, if any
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(source_id) = &self.source_id {
            write!(f, " (source: {})", source_id)?;
        }
        if let Some(status) = self.status {
            write!(f, " (status: {})", status)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Closed set of acquisition failures
///
/// Returned by [`crate::Acquire`] implementations. The pipeline branches on
/// [`AcquireError::kind`] only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcquireError {
    /// Input is neither a URL nor an existing file
    #[error("Input is neither a valid URL nor an existing file: {input}")]
    UnrecognizedSource { input: String },

    /// URL could not be turned into a request
    #[error("Invalid URL {source_id}: {reason}")]
    InvalidUrl { source_id: String, reason: String },

    /// Proxy URL could not be parsed or applied
    #[error("Proxy error: {reason}")]
    InvalidProxy { reason: String },

    /// Request exceeded the configured timeout
    #[error("Network timeout fetching {source_id}")]
    Timeout { source_id: String },

    /// Connection could not be established or was interrupted
    #[error("Connection error fetching {source_id}: {reason}")]
    Connection { source_id: String, reason: String },

    /// Server answered with a status other than 200 OK
    #[error("HTTP error: {reason} ({status})")]
    HttpStatus {
        source_id: String,
        status: u16,
        reason: String,
    },

    /// Local file does not exist
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Local file exists but could not be read
    #[error("Failed to read file {path}: {reason}")]
    Io { path: String, reason: String },
}

impl AcquireError {
    /// Error kind for this acquisition failure
    pub fn kind(&self) -> ExErrorKind {
        match self {
            AcquireError::UnrecognizedSource { .. } => ExErrorKind::UnrecognizedSource,
            AcquireError::InvalidUrl { .. } => ExErrorKind::InvalidUrl,
            AcquireError::InvalidProxy { .. } => ExErrorKind::InvalidProxy,
            AcquireError::Timeout { .. } => ExErrorKind::Timeout,
            AcquireError::Connection { .. } => ExErrorKind::Connection,
            AcquireError::HttpStatus { .. } => ExErrorKind::HttpStatus,
            AcquireError::NotFound { .. } => ExErrorKind::NotFound,
            AcquireError::Io { .. } => ExErrorKind::Io,
        }
    }
}

/// Failure of the best-effort notification side effect
///
/// Never propagated into a run's result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Clipboard unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Clipboard write failed: {reason}")]
    Write { reason: String },
}

/// Fatal errors of a pipeline run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error(transparent)]
    Acquire(#[from] AcquireError),

    /// Artifact could not be written; the previous artifact is intact
    #[error("Failed to write artifact {key} ({op}): {reason}")]
    Persist {
        key: String,
        op: String,
        reason: String,
    },

    /// Per-key lock could not be taken
    #[error("Failed to lock artifact {key}: {reason}")]
    Lock { key: String, reason: String },

    /// Source produced no entries while the stored artifact is non-empty
    #[error("Source {source_id} yielded no entries; refusing to wipe {prior} stored entries")]
    EmptySource { source_id: String, prior: usize },
}

impl From<SyncError> for ExError {
    fn from(err: SyncError) -> Self {
        let message = err.to_string();
        match err {
            SyncError::Acquire(acquire) => {
                let base = ExError::new(acquire.kind())
                    .with_op("acquire")
                    .with_message(message);
                match acquire {
                    AcquireError::HttpStatus {
                        source_id, status, ..
                    } => base.with_source_id(source_id).with_status(status),
                    AcquireError::InvalidUrl { source_id, .. }
                    | AcquireError::Timeout { source_id }
                    | AcquireError::Connection { source_id, .. } => base.with_source_id(source_id),
                    AcquireError::NotFound { path } | AcquireError::Io { path, .. } => {
                        base.with_source_id(path)
                    }
                    AcquireError::UnrecognizedSource { input } => base.with_source_id(input),
                    AcquireError::InvalidProxy { .. } => base,
                }
            }
            SyncError::Persist { key, op, .. } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_source_id(key)
                .with_message(message),
            SyncError::Lock { key, .. } => ExError::new(ExErrorKind::Concurrency)
                .with_op("lock_artifact")
                .with_source_id(key)
                .with_message(message),
            SyncError::EmptySource { source_id, .. } => ExError::new(ExErrorKind::EmptySource)
                .with_op("decide")
                .with_source_id(source_id)
                .with_message(message),
        }
    }
}

impl From<NotifyError> for ExError {
    fn from(err: NotifyError) -> Self {
        ExError::new(ExErrorKind::Notify)
            .with_op("notify")
            .with_message(err.to_string())
    }
}
