//! Knowledge filter
//!
//! Narrows a ranked result set with player-supplied letter clues. Each clue
//! is an independent predicate; the filter is their conjunction, so clue
//! order never changes the outcome and re-filtering is a no-op. Relative
//! ranking order is preserved.
//!
//! An empty result is a valid outcome ("no viable candidates remain"), not
//! an error.

use crate::core::Clue;
use crate::scorer::WordScore;

/// Keep the ranked entries permitted by every clue
///
/// # Examples
/// ```
/// use wordle_ranker::core::{Clue, Word};
/// use wordle_ranker::filter::apply_clues;
/// use wordle_ranker::index::build_index;
/// use wordle_ranker::scorer::rank;
///
/// let pool = vec![Word::new("apple").unwrap(), Word::new("grape").unwrap()];
/// let table = build_index(&pool).unwrap();
/// let ranked = rank(&pool, &table, &[], false);
///
/// let clues = [Clue::exact_position('a', 1).unwrap()];
/// let filtered = apply_clues(ranked, &clues);
///
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].word.text(), "apple");
/// ```
#[must_use]
pub fn apply_clues(ranked: Vec<WordScore>, clues: &[Clue]) -> Vec<WordScore> {
    ranked
        .into_iter()
        .filter(|entry| clues.iter().all(|clue| clue.permits(&entry.word)))
        .collect()
}
