//! Error types for playlist encoding and decoding

use beatlist_core::PlaylistError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Buffer too short for format marker")]
    MissingMagic,

    #[error("Format marker mismatch")]
    BadMagic,

    #[error("Unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("{0} unexpected bytes after playlist body")]
    TrailingBytes(usize),

    #[error("Field {field} too large to encode ({len} bytes)")]
    TooLarge { field: &'static str, len: usize },

    #[error("Legacy playlist is not valid UTF-8")]
    LegacyEncoding,

    #[error("Legacy playlist JSON: {0}")]
    LegacyJson(#[from] serde_json::Error),
}

impl FormatError {
    /// Whether the error came from the legacy JSON decoder
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::LegacyEncoding | Self::LegacyJson(_))
    }
}

impl From<FormatError> for PlaylistError {
    fn from(err: FormatError) -> Self {
        if err.is_legacy() {
            PlaylistError::MalformedLegacy(err.to_string())
        } else {
            PlaylistError::Format(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
