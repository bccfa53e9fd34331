//! Pipeline orchestrator.
//!
//! Sequences one run end to end:
//! acquisition → classification → normalization → prior-state load →
//! diff → conditional persist → notification.
//!
//! The collaborators are injected through [`Acquire`], [`StateStore`] and
//! [`Notify`]. The run is strictly sequential and performs no retries.

pub mod config;
pub mod orchestrator;
pub mod report;
pub mod state;
pub mod traits;

pub use config::{EmptySourcePolicy, PipelineConfig};
pub use orchestrator::Pipeline;
pub use report::{RunOutcome, RunReport};
pub use state::{PipelineState, StateTrace};
pub use traits::{Acquire, NoopNotifier, Notify, StateStore};
