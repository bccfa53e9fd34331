//! Canonical schema constants for structured logging and events
//!
//! Event names are emitted by the logging macros; field keys are what the
//! test capture layer and logging tests read back.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Source identifier; isolates one run's events in the test capture
pub const FIELD_SOURCE_ID: &str = "source_id";

// Diff counts
pub const FIELD_ADDED: &str = "added";
pub const FIELD_UNCHANGED: &str = "unchanged";
pub const FIELD_REMOVED: &str = "removed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
