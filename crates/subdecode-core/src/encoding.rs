//! Transport encoding detection.
//!
//! Subscription payloads are either plain text or the same text wrapped in
//! URL-safe base64. Detection is a classification, not a validation: text
//! the decoder rejects is simply plain.

use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::Serialize;

/// Standard alphabet decoder that tolerates non-canonical trailing bits
/// but requires exact `=` padding.
/// Input reaches it already mapped from the URL-safe alphabet and padded.
const TRANSPORT_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// How the fetched payload was encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceEncoding {
    Plain,
    Base64,
}

impl SourceEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            SourceEncoding::Plain => "plain",
            SourceEncoding::Base64 => "base64",
        }
    }
}

/// Text ready for normalization, with the encoding it arrived in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Attempt a transport decode of `raw`
///
/// Surrounding whitespace is trimmed, `-`/`_` are mapped onto `+`/`/`, and
/// `=` padding is added until the length is a multiple of four. Interior
/// line breaks count toward that length and are skipped afterwards, so a
/// plain multi-line list whose symbols only line up once the breaks are
/// ignored is rejected. Returns `None` when the decoder rejects the input
/// or the decoded bytes are not UTF-8.
pub fn decode(raw: &str) -> Option<String> {
    let mut padded: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }

    let symbols: Vec<u8> = padded
        .bytes()
        .filter(|b| *b != b'\r' && *b != b'\n')
        .collect();
    let padding = symbols.iter().rev().take_while(|b| **b == b'=').count();
    if symbols.len() % 4 != 0 || padding > 2 {
        return None;
    }

    let bytes = TRANSPORT_DECODER.decode(&symbols).ok()?;
    String::from_utf8(bytes).ok()
}

/// Wrap `text` in the transport encoding (URL-safe alphabet, padded)
pub fn encode(text: &str) -> String {
    URL_SAFE.encode(text.as_bytes())
}

/// Classify raw text as encoded or plain
///
/// Whitespace-only input is plain; there is nothing to decode.
pub fn classify(raw: &str) -> Classified {
    if raw.trim().is_empty() {
        return Classified {
            text: raw.to_string(),
            encoding: SourceEncoding::Plain,
        };
    }

    match decode(raw) {
        Some(text) => Classified {
            text,
            encoding: SourceEncoding::Base64,
        },
        None => Classified {
            text: raw.to_string(),
            encoding: SourceEncoding::Plain,
        },
    }
}
