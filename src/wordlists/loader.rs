//! Word list loading utilities
//!
//! Pools come from plain one-word-per-line files or from JSON arrays of
//! base64-encoded words (the dictionary's obfuscated storage form).

use super::codec::{CodecError, decode_word};
use crate::core::Word;
use rand::seq::SliceRandom;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for encoded pool loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    Codec(CodecError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "Word list is not a JSON string array: {err}"),
            Self::Codec(err) => write!(f, "Undecodable word list entry: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load words from a plain-text file, one word per line
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_ranker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Load an encoded pool: a JSON array of base64-encoded words
///
/// All-or-nothing: a single undecodable entry fails the whole load, since a
/// silently shrunken pool would skew every precomputed count.
///
/// # Errors
/// Returns `LoadError` for I/O failure, non-array JSON, or any entry that
/// does not decode to a valid word.
pub fn load_encoded<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<String> = serde_json::from_str(&content).map_err(LoadError::Json)?;

    entries
        .iter()
        .map(|entry| decode_word(entry).map_err(LoadError::Codec))
        .collect()
}

/// Shuffle a pool in place
///
/// Applied before precomputation when the caller wants ranking ties broken
/// in a fresh order from run to run.
pub fn shuffle_pool(pool: &mut [Word]) {
    pool.shuffle(&mut rand::rng());
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_ranker::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "grape"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
