//! Match-count table persistence
//!
//! The table is stored as JSON mapping each word to an object of
//! pattern-string → count cells, pattern strings in the `_?x` notation
//! (`{"apple": {"_____": 12, "____x": 3, ...}}`). Keys are written in
//! sorted order so repeated runs produce identical files.

use crate::core::Pattern;
use crate::index::{IndexError, MatchCountTable};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// On-disk shape of the table
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
struct StoredTable(BTreeMap<String, BTreeMap<String, u32>>);

/// Error type for table persistence
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    UnknownPattern { word: String, pattern: String },
    BadTable(IndexError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::UnknownPattern { word, pattern } => {
                write!(f, "Row for '{word}' has malformed pattern key '{pattern}'")
            }
            Self::BadTable(err) => write!(f, "Stored table is invalid: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::BadTable(err) => Some(err),
            Self::UnknownPattern { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Serialize a table to its JSON form
///
/// # Errors
/// Returns `StoreError::Json` if serialization fails.
pub fn to_json_string(table: &MatchCountTable) -> Result<String, StoreError> {
    let mut stored = BTreeMap::new();

    for (word, row) in table.iter() {
        let cells: BTreeMap<String, u32> = row
            .iter()
            .enumerate()
            .map(|(index, &count)| (Pattern::from_index(index).to_string(), count))
            .collect();
        stored.insert(word.to_string(), cells);
    }

    Ok(serde_json::to_string(&StoredTable(stored))?)
}

/// Deserialize a table from its JSON form
///
/// Cells absent from a word's object read as 0.
///
/// # Errors
/// Returns `StoreError::Json` for malformed JSON and
/// `StoreError::UnknownPattern` for a pattern key outside the `_?x` notation.
pub fn from_json_string(json: &str) -> Result<MatchCountTable, StoreError> {
    let StoredTable(stored) = serde_json::from_str(json)?;

    let mut rows = FxHashMap::default();
    for (word, cells) in stored {
        let mut row = vec![0u32; Pattern::COUNT];
        for (key, count) in cells {
            let pattern = Pattern::from_str(&key).map_err(|_| StoreError::UnknownPattern {
                word: word.clone(),
                pattern: key.clone(),
            })?;
            row[pattern.index()] = count;
        }
        rows.insert(word, row);
    }

    MatchCountTable::from_rows(rows).map_err(StoreError::BadTable)
}

/// Write a table to a JSON file
///
/// # Errors
/// Returns `StoreError` on serialization or I/O failure.
pub fn save<P: AsRef<Path>>(table: &MatchCountTable, path: P) -> Result<(), StoreError> {
    fs::write(path, to_json_string(table)?)?;
    Ok(())
}

/// Read a table from a JSON file
///
/// # Errors
/// Returns `StoreError` on I/O failure or malformed content.
pub fn load<P: AsRef<Path>>(path: P) -> Result<MatchCountTable, StoreError> {
    from_json_string(&fs::read_to_string(path)?)
}
