//! Candidate scoring and ranking
//!
//! Consumes the precomputed match-count table plus the feedback patterns
//! observed so far, and ranks pool words by cumulative discriminating power.
//!
//! A word is dropped as soon as its count for an observed pattern is zero.
//! That rule is a heuristic, not a sound inference: a zero cell says the word
//! would leave no candidates after that feedback, not that the feedback was
//! impossible. It is kept because it is the engine's established behavior.

use crate::core::{Pattern, Word};
use crate::index::MatchCountTable;

/// Score details for one surviving candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub word: Word,
    /// Count contributed by each observed pattern, in observation order
    pub contributions: Vec<(Pattern, u32)>,
    /// Sum of the contributions
    pub raw_score: u64,
    /// Ranking key: `raw_score`, times the distinct-letter count when
    /// weighted scoring is on
    pub score: u64,
}

/// Rank pool words by cumulative match counts over the observed patterns
///
/// Every pool word starts at score 0. Each observed pattern adds that word's
/// precomputed count to its total; a zero count eliminates the word from the
/// running. Survivors are sorted descending by final score (stable, so ties
/// keep pool order). With `weighted`, the final score is multiplied by the
/// word's distinct-letter count to favor vocabulary-broadening guesses.
///
/// No observed patterns means first-guess mode: everything survives at 0.
/// Words without a table row count 0 for every pattern, so they survive only
/// in first-guess mode. An empty pool yields an empty ranking.
///
/// # Examples
/// ```
/// use wordle_ranker::core::Word;
/// use wordle_ranker::index::build_index;
/// use wordle_ranker::scorer::rank;
///
/// let pool = vec![Word::new("abcde").unwrap(), Word::new("fghij").unwrap()];
/// let table = build_index(&pool).unwrap();
///
/// let ranked = rank(&pool, &table, &[], false);
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked.iter().all(|entry| entry.score == 0));
/// ```
#[must_use]
pub fn rank(
    pool: &[Word],
    table: &MatchCountTable,
    observed: &[Pattern],
    weighted: bool,
) -> Vec<WordScore> {
    let mut survivors: Vec<WordScore> = pool
        .iter()
        .map(|word| WordScore {
            word: word.clone(),
            contributions: Vec::with_capacity(observed.len()),
            raw_score: 0,
            score: 0,
        })
        .collect();

    for pattern in observed {
        survivors = survivors
            .into_iter()
            .filter_map(|mut entry| {
                let count = table.count(&entry.word, pattern).unwrap_or(0);
                entry.raw_score += u64::from(count);
                entry.contributions.push((*pattern, count));
                (count != 0).then_some(entry)
            })
            .collect();
    }

    for entry in &mut survivors {
        entry.score = if weighted {
            entry.raw_score * u64::from(entry.word.unique_letters())
        } else {
            entry.raw_score
        };
    }

    // Stable: ties keep pool order
    survivors.sort_by(|a, b| b.score.cmp(&a.score));
    survivors
}
