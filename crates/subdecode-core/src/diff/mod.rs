//! Entry set diff.
//!
//! Compares the previously persisted entry set with a freshly normalized
//! one and reports counts.
//!
//! ## Entry point
//!
//! ```
//! use subdecode_core::diff::{compute_diff, render_human_summary};
//! use subdecode_core::EntrySet;
//!
//! let old = EntrySet::normalize("a\nb");
//! let new = EntrySet::normalize("b\nc");
//! let diff = compute_diff(&old, &new);
//! assert_eq!((diff.added, diff.unchanged, diff.removed), (1, 1, 1));
//! let summary = render_human_summary(&diff);
//! assert!(summary.contains("Added: 1"));
//! ```
//!
//! ## Guarantees
//!
//! - `added + unchanged == new.len()` and `removed + unchanged == old.len()`.
//! - Order-insensitive: only set membership matters.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::compute_diff;
pub use human_summary::render_human_summary;
pub use model::DiffResult;
