//! [`Acquire`] implementation dispatching on the source origin.

use subdecode_core::{Acquire, AcquireError, RawPayload, Source};

use crate::file::read_local;
use crate::http::HttpFetcher;
use crate::options::FetchOptions;

/// Acquires remote sources over HTTP and local sources from disk
///
/// The HTTP client is only built for remote sources, so a bad proxy never
/// affects local reads.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    options: FetchOptions,
}

impl Fetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl Acquire for Fetcher {
    fn acquire(&self, source: &Source) -> Result<RawPayload, AcquireError> {
        let bytes = match source.path() {
            Some(path) => read_local(&path)?,
            None => HttpFetcher::new(&self.options)?.fetch(source.id())?,
        };
        Ok(RawPayload::new(source.origin(), bytes))
    }
}
