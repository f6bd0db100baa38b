//! Feedback-pattern matching
//!
//! Compiles an (answer, pattern) pair into one rule per position, then
//! evaluates candidate words against it. This is the primitive the
//! precomputation sweeps: `count_matches` answers "how many pool words,
//! were they the secret answer, would yield this pattern for this guess?"
//!
//! Miss is treated as a global exclusion: the letter may appear nowhere in
//! the candidate, not just away from the flagged position. That is the
//! hard-mode approximation this engine is built around; it diverges from
//! official feedback when a guess repeats a letter with mixed hit/miss
//! results.

use crate::core::{Feedback, Pattern, WORD_LENGTH, Word};

/// One position's compiled rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Position must be exactly this letter
    Exact(u8),
    /// Position must be one of the letters in the mask
    OneOf(u32),
    /// Position must be none of the letters in the mask
    NoneOf(u32),
}

impl Rule {
    fn accepts(self, letter: u8) -> bool {
        let bit = 1u32 << (letter - b'a');
        match self {
            Self::Exact(expected) => letter == expected,
            Self::OneOf(mask) => mask & bit != 0,
            Self::NoneOf(mask) => mask & bit == 0,
        }
    }
}

/// Per-position character constraint compiled from an answer and a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    rules: [Rule; WORD_LENGTH],
}

impl Constraint {
    /// Compile the constraint for guessing `answer` and observing `pattern`
    ///
    /// Per position i:
    /// - hit: must equal `answer[i]`;
    /// - displaced: must be one of the letters `answer` has at other
    ///   positions (a letter repeated elsewhere stays allowed);
    /// - miss: must not be any letter of `answer`.
    #[must_use]
    pub fn build(answer: &Word, pattern: &Pattern) -> Self {
        let mut rules = [Rule::NoneOf(0); WORD_LENGTH];

        for (i, (rule, symbol)) in rules.iter_mut().zip(pattern.symbols()).enumerate() {
            *rule = match symbol {
                Feedback::Hit => Rule::Exact(answer.char_at(i)),
                Feedback::Miss => Rule::NoneOf(answer.letter_mask()),
                Feedback::Displaced => {
                    let mut mask = 0u32;
                    for (j, &letter) in answer.chars().iter().enumerate() {
                        if j != i {
                            mask |= 1 << (letter - b'a');
                        }
                    }
                    Rule::OneOf(mask)
                }
            };
        }

        Self { rules }
    }

    /// Check whether a candidate word satisfies every position's rule
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.rules
            .iter()
            .zip(word.chars())
            .all(|(rule, &letter)| rule.accepts(letter))
    }
}

/// Count the pool words consistent with observing `pattern` after guessing `answer`
///
/// Pure, O(|pool| × 5).
///
/// # Examples
/// ```
/// use wordle_ranker::core::{Pattern, Word};
/// use wordle_ranker::matcher::count_matches;
///
/// let answer = Word::new("apple").unwrap();
/// let pool = vec![Word::new("apple").unwrap(), Word::new("angle").unwrap()];
///
/// let count = count_matches(&answer, &Pattern::ALL_HITS, &pool);
/// assert_eq!(count, 1); // Only the answer itself is all hits
/// ```
#[must_use]
pub fn count_matches(answer: &Word, pattern: &Pattern, pool: &[Word]) -> usize {
    let constraint = Constraint::build(answer, pattern);
    pool.iter().filter(|word| constraint.matches(word)).count()
}
