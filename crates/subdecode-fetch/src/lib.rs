//! SubDecode Fetch - acquisition collaborator
//!
//! Provides:
//! - Source resolution (URL vs. existing local file)
//! - Blocking HTTP GET with user agent, proxy and timeouts
//! - Local file reads
//! - [`Fetcher`], the [`subdecode_core::Acquire`] implementation combining them
//!
//! Every failure is reported as one of the closed
//! [`subdecode_core::AcquireError`] kinds. No retries are performed.

pub mod fetcher;
pub mod file;
pub mod http;
pub mod options;
pub mod source;
pub mod user_agent;

pub use fetcher::Fetcher;
pub use options::FetchOptions;
pub use source::resolve_source;
pub use user_agent::UserAgent;
