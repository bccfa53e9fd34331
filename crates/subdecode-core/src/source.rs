//! Sources and the raw payloads acquired from them.

use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;

/// Where a payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Remote,
    LocalFile,
}

impl Origin {
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Remote => "remote",
            Origin::LocalFile => "local-file",
        }
    }
}

/// A resolved source: its identifier as supplied by the caller plus its origin
///
/// The identifier doubles as the input of [`crate::ArtifactKey::derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    id: String,
    origin: Origin,
}

impl Source {
    /// A remote source fetched over HTTP(S)
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            id: url.into(),
            origin: Origin::Remote,
        }
    }

    /// A local file read from disk
    pub fn local_file(path: impl Into<String>) -> Self {
        Self {
            id: path.into(),
            origin: Origin::LocalFile,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Filesystem path for local sources
    pub fn path(&self) -> Option<PathBuf> {
        match self.origin {
            Origin::LocalFile => Some(PathBuf::from(&self.id)),
            Origin::Remote => None,
        }
    }
}

/// Bytes produced by acquisition, tagged with their origin
///
/// Lives for one pipeline run only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    pub origin: Origin,
    pub bytes: Vec<u8>,
}

impl RawPayload {
    pub fn new(origin: Origin, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            origin,
            bytes: bytes.into(),
        }
    }

    /// Payload as text; invalid UTF-8 sequences become U+FFFD
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_source_has_path() {
        let source = Source::local_file("subs/list.txt");
        assert_eq!(source.origin(), Origin::LocalFile);
        assert_eq!(source.path(), Some(PathBuf::from("subs/list.txt")));
        assert_eq!(Source::remote("https://x/y").path(), None);
    }

    #[test]
    fn test_payload_text_is_lossy() {
        let payload = RawPayload::new(Origin::Remote, vec![b'a', 0xff, b'b']);
        assert_eq!(payload.text(), "a\u{fffd}b");
    }
}
