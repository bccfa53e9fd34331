//! Artifact key derivation.
//!
//! Maps a source identifier (URL or path) to a filesystem-safe artifact
//! name. The mapping is pure: the same identifier always yields the same
//! key, and the digest suffix keeps identifiers that sanitize to the same
//! readable text apart.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Longest readable prefix kept from the identifier
const MAX_READABLE_LEN: usize = 96;

/// Hex characters of the identifier digest appended to the key
const DIGEST_SUFFIX_LEN: usize = 8;

/// Filesystem-safe name of a persisted artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArtifactKey(String);

impl ArtifactKey {
    /// Derive the key for a source identifier
    ///
    /// For "https://example.com/sub?token=1" returns
    /// "example.com_sub_token_1-<8 hex chars>".
    pub fn derive(source_id: &str) -> Self {
        let stripped = source_id
            .strip_prefix("https://")
            .or_else(|| source_id.strip_prefix("http://"))
            .unwrap_or(source_id);

        let readable: String = stripped
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .take(MAX_READABLE_LEN)
            .collect();

        let digest = hex::encode(Sha256::digest(source_id.as_bytes()));
        Self(format!("{}-{}", readable, &digest[..DIGEST_SUFFIX_LEN]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let a = ArtifactKey::derive("https://example.com/sub?token=1");
        let b = ArtifactKey::derive("https://example.com/sub?token=1");
        assert_eq!(a, b);
        assert!(a.as_str().starts_with("example.com_sub_token_1-"));
    }

    #[test]
    fn test_separators_are_replaced() {
        let key = ArtifactKey::derive(r#"C:\subs\list|"a"<b>*.txt"#);
        let readable = key.as_str().rsplit_once('-').unwrap().0;
        assert_eq!(readable, "C__subs_list__a__b__.txt");
        assert!(!key
            .as_str()
            .contains(&['/', '\\', ':', '*', '?', '"', '<', '>', '|'][..]));
    }

    #[test]
    fn test_identifiers_sanitizing_alike_get_distinct_keys() {
        let slash = ArtifactKey::derive("https://example.com/a/b");
        let underscore = ArtifactKey::derive("https://example.com/a_b");
        assert_ne!(slash, underscore);
    }

    #[test]
    fn test_scheme_variants_get_distinct_keys() {
        let http = ArtifactKey::derive("http://example.com/sub");
        let https = ArtifactKey::derive("https://example.com/sub");
        assert_ne!(http, https);
    }

    #[test]
    fn test_long_identifiers_are_truncated() {
        let long = format!("https://example.com/{}", "x".repeat(500));
        let key = ArtifactKey::derive(&long);
        assert_eq!(key.as_str().len(), MAX_READABLE_LEN + 1 + DIGEST_SUFFIX_LEN);
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        let key = ArtifactKey::derive("订阅.txt");
        assert!(key.as_str().starts_with("__.txt-"));
    }
}
