//! Source resolution.

use std::path::Path;

use reqwest::Url;
use subdecode_core::{AcquireError, Source};

/// Resolve user input into a [`Source`]
///
/// A URL with both a scheme and a host is remote; otherwise the input must
/// name an existing file. Anything else is unrecognized.
///
/// ## Errors
///
/// - `AcquireError::UnrecognizedSource` when neither rule applies
pub fn resolve_source(input: &str) -> Result<Source, AcquireError> {
    let input = input.trim();

    if let Ok(url) = Url::parse(input) {
        if !url.scheme().is_empty() && url.has_host() {
            return Ok(Source::remote(input));
        }
    }

    if !input.is_empty() && Path::new(input).is_file() {
        return Ok(Source::local_file(input));
    }

    Err(AcquireError::UnrecognizedSource {
        input: input.to_string(),
    })
}
