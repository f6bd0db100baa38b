//! Match-count precomputation
//!
//! For every word in the pool, counts how many pool words are consistent
//! with each of the 243 feedback patterns. The result is the lookup table
//! the scorer reads; building it is O(|pool|² × 243 × 5) and intended to run
//! once, with the table persisted by [`crate::store`].
//!
//! Rows are independent (one word's 243 counts touch only the shared,
//! read-only pool), so they are computed in parallel with rayon.

use crate::core::{Pattern, Word};
use crate::matcher::count_matches;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;

/// Lookup table: word → per-pattern match counts
///
/// Each row holds exactly [`Pattern::COUNT`] counts, slot i belonging to the
/// pattern with index i. For a guess with five distinct letters a row sums to
/// the pool size (every pool word lands in exactly one pattern); with
/// repeated letters the approximate hit/displaced semantics can accept a
/// word under more than one pattern, so the sum may exceed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCountTable {
    rows: FxHashMap<String, Vec<u32>>,
}

/// Error type for index construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    EmptyPool,
    BadRowLength { word: String, len: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Cannot build an index over an empty word pool"),
            Self::BadRowLength { word, len } => write!(
                f,
                "Row for '{word}' has {len} counts, expected {}",
                Pattern::COUNT
            ),
        }
    }
}

impl std::error::Error for IndexError {}

impl MatchCountTable {
    /// Assemble a table from prebuilt rows, validating row lengths
    ///
    /// # Errors
    /// Returns `IndexError::BadRowLength` if any row does not hold exactly
    /// 243 counts.
    pub fn from_rows(rows: FxHashMap<String, Vec<u32>>) -> Result<Self, IndexError> {
        for (word, row) in &rows {
            if row.len() != Pattern::COUNT {
                return Err(IndexError::BadRowLength {
                    word: word.clone(),
                    len: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of words with a row in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The full count row for a word, if present
    #[must_use]
    pub fn row(&self, word: &Word) -> Option<&[u32]> {
        self.rows.get(word.text()).map(Vec::as_slice)
    }

    /// The match count for one (word, pattern) cell, if the word has a row
    #[must_use]
    pub fn count(&self, word: &Word, pattern: &Pattern) -> Option<u32> {
        self.row(word).map(|row| row[pattern.index()])
    }

    /// Iterate over (word text, count row) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.rows
            .iter()
            .map(|(word, row)| (word.as_str(), row.as_slice()))
    }
}

/// Build the match-count table for a pool
///
/// # Errors
/// Returns `IndexError::EmptyPool` for an empty pool. Malformed words cannot
/// reach this point: [`Word`] construction already rejects them.
///
/// # Examples
/// ```
/// use wordle_ranker::core::{Pattern, Word};
/// use wordle_ranker::index::build_index;
///
/// let pool = vec![Word::new("abcde").unwrap(), Word::new("fghij").unwrap()];
/// let table = build_index(&pool).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.count(&pool[0], &Pattern::ALL_HITS), Some(1));
/// ```
pub fn build_index(pool: &[Word]) -> Result<MatchCountTable, IndexError> {
    build_index_with_progress(pool, || {})
}

/// Build the match-count table, invoking `on_row` after each completed row
///
/// The callback runs on rayon worker threads; the CLI uses it to tick a
/// progress bar.
///
/// # Errors
/// Returns `IndexError::EmptyPool` for an empty pool.
pub fn build_index_with_progress(
    pool: &[Word],
    on_row: impl Fn() + Sync,
) -> Result<MatchCountTable, IndexError> {
    if pool.is_empty() {
        return Err(IndexError::EmptyPool);
    }

    let patterns = Pattern::all();

    let rows: FxHashMap<String, Vec<u32>> = pool
        .par_iter()
        .map(|word| {
            let counts: Vec<u32> = patterns
                .iter()
                .map(|pattern| count_matches(word, pattern, pool) as u32)
                .collect();
            on_row();
            (word.text().to_string(), counts)
        })
        .collect();

    Ok(MatchCountTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn build_index_empty_pool_fails() {
        assert_eq!(build_index(&[]), Err(IndexError::EmptyPool));
    }

    #[test]
    fn build_index_has_row_per_word() {
        let words = pool(&["apple", "ample", "angle"]);
        let table = build_index(&words).unwrap();

        assert_eq!(table.len(), 3);
        for word in &words {
            assert_eq!(table.row(word).unwrap().len(), Pattern::COUNT);
        }
    }

    #[test]
    fn all_hits_cell_is_always_one() {
        let words = pool(&["apple", "ample", "angle"]);
        let table = build_index(&words).unwrap();

        for word in &words {
            assert_eq!(table.count(word, &Pattern::ALL_HITS), Some(1));
        }
    }

    #[test]
    fn row_sums_to_pool_size_for_distinct_letter_guesses() {
        // The partition invariant holds when the guess has no repeated
        // letters; every pool word then satisfies exactly one pattern
        let words = pool(&["crane", "slimy", "porgy", "dutch", "whack"]);
        let table = build_index(&words).unwrap();

        for word in &words {
            let sum: u32 = table.row(word).unwrap().iter().sum();
            assert_eq!(sum, words.len() as u32, "row sum for {word}");
        }
    }

    #[test]
    fn missing_word_has_no_row() {
        let words = pool(&["apple"]);
        let table = build_index(&words).unwrap();

        let other = Word::new("slate").unwrap();
        assert_eq!(table.row(&other), None);
        assert_eq!(table.count(&other, &Pattern::ALL_HITS), None);
    }

    #[test]
    fn from_rows_rejects_short_rows() {
        let mut rows = FxHashMap::default();
        rows.insert("apple".to_string(), vec![0u32; 10]);

        assert!(matches!(
            MatchCountTable::from_rows(rows),
            Err(IndexError::BadRowLength { len: 10, .. })
        ));
    }

    #[test]
    fn singleton_pool_row_is_all_hits_only() {
        // A pool of one word matches itself on exactly one pattern
        let words = pool(&["crane"]);
        let table = build_index(&words).unwrap();
        let row = table.row(&words[0]).unwrap();

        assert_eq!(row[Pattern::ALL_HITS.index()], 1);
        assert_eq!(row.iter().sum::<u32>(), 1);
    }
}
