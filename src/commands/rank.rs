//! Rank command
//!
//! Scores a pool against the observed feedback patterns, then narrows the
//! ranking with any letter clues.

use crate::core::{Clue, Pattern, Word};
use crate::filter::apply_clues;
use crate::index::MatchCountTable;
use crate::scorer::{WordScore, rank};

/// Configuration for a ranking run
pub struct RankConfig {
    /// Feedback patterns observed so far, one per prior guess
    pub observed: Vec<Pattern>,
    /// Letter clues to filter the ranking with
    pub clues: Vec<Clue>,
    /// Multiply scores by each word's distinct-letter count
    pub weighted: bool,
    /// Truncate the printed ranking to this many entries
    pub limit: Option<usize>,
}

/// Outcome of a ranking run
pub struct RankOutcome {
    /// Size of the candidate pool scored
    pub pool_size: usize,
    /// Survivors of pattern scoring, before clue filtering
    pub scored: usize,
    /// Final ranking, best guess first
    pub results: Vec<WordScore>,
    pub weighted: bool,
    pub limit: Option<usize>,
}

/// Score the pool and apply the knowledge filter
///
/// An empty `results` list is the "no viable candidates remain" outcome,
/// not a failure.
#[must_use]
pub fn run_rank(pool: &[Word], table: &MatchCountTable, config: &RankConfig) -> RankOutcome {
    let ranked = rank(pool, table, &config.observed, config.weighted);
    let scored = ranked.len();
    let results = apply_clues(ranked, &config.clues);

    RankOutcome {
        pool_size: pool.len(),
        scored,
        results,
        weighted: config.weighted,
        limit: config.limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::wordlists::loader::words_from_slice;
    use std::str::FromStr;

    #[test]
    fn rank_without_patterns_or_clues_keeps_everything() {
        let pool = words_from_slice(&["apple", "grape"]);
        let table = build_index(&pool).unwrap();

        let outcome = run_rank(
            &pool,
            &table,
            &RankConfig {
                observed: vec![],
                clues: vec![],
                weighted: false,
                limit: None,
            },
        );

        assert_eq!(outcome.pool_size, 2);
        assert_eq!(outcome.scored, 2);
        assert_eq!(outcome.results.len(), 2);
    }

    #[test]
    fn clues_narrow_after_scoring() {
        let pool = words_from_slice(&["apple", "grape", "melon"]);
        let table = build_index(&pool).unwrap();

        let outcome = run_rank(
            &pool,
            &table,
            &RankConfig {
                observed: vec![],
                clues: vec![Clue::exact_position('a', 1).unwrap()],
                weighted: false,
                limit: None,
            },
        );

        assert_eq!(outcome.scored, 3);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].word.text(), "apple");
    }

    #[test]
    fn impossible_pattern_empties_the_ranking() {
        let pool = words_from_slice(&["abcde", "fghij"]);
        let table = build_index(&pool).unwrap();

        // Neither word can see four hits plus a displaced letter in this pool
        let outcome = run_rank(
            &pool,
            &table,
            &RankConfig {
                observed: vec![Pattern::from_str("xxxx?").unwrap()],
                clues: vec![],
                weighted: false,
                limit: None,
            },
        );

        assert_eq!(outcome.scored, 0);
        assert!(outcome.results.is_empty());
    }
}
