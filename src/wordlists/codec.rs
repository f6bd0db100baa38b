//! Word codec
//!
//! Dictionary files store words base64-encoded. The codec turns one encoded
//! entry into a validated [`Word`] and back.

use crate::core::{Word, WordError};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;

/// Error type for encoded words
#[derive(Debug)]
pub enum CodecError {
    Base64(base64::DecodeError),
    NotText,
    Word(WordError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Invalid base64: {err}"),
            Self::NotText => write!(f, "Decoded bytes are not text"),
            Self::Word(err) => write!(f, "Decoded word is invalid: {err}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64(err) => Some(err),
            Self::Word(err) => Some(err),
            Self::NotText => None,
        }
    }
}

/// Decode one base64-encoded dictionary entry
///
/// # Errors
/// Returns `CodecError` for invalid base64, non-text bytes, or a decoded
/// string that is not a valid word.
///
/// # Examples
/// ```
/// use wordle_ranker::wordlists::codec::decode_word;
///
/// let word = decode_word("YXBwbGU=").unwrap();
/// assert_eq!(word.text(), "apple");
/// ```
pub fn decode_word(encoded: &str) -> Result<Word, CodecError> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(CodecError::Base64)?;
    let text = String::from_utf8(bytes).map_err(|_| CodecError::NotText)?;
    Word::new(text).map_err(CodecError::Word)
}

/// Encode a word for storage
#[must_use]
pub fn encode_word(word: &Word) -> String {
    STANDARD.encode(word.text())
}
