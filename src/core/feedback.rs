//! Feedback symbols and patterns
//!
//! A guess against a secret answer yields one feedback symbol per position:
//! - `_` miss: the letter is not in the answer
//! - `?` displaced: the letter is in the answer, but at another position
//! - `x` hit: the letter is at exactly this position
//!
//! A `Pattern` is the ordered 5-symbol outcome, one of 3^5 = 243 labels.
//! Patterns map bijectively onto 0..243 (position 0 most significant,
//! `_` < `?` < `x`), which is how the match-count table indexes its rows.

use super::word::WORD_LENGTH;
use std::fmt;

/// One position's feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter absent from the answer (`_`)
    Miss,
    /// Letter present at some other position (`?`)
    Displaced,
    /// Letter at exactly this position (`x`)
    Hit,
}

impl Feedback {
    /// All symbols, in enumeration order (`_` < `?` < `x`)
    pub const ALL: [Self; 3] = [Self::Miss, Self::Displaced, Self::Hit];

    /// The symbol's textual notation
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Miss => '_',
            Self::Displaced => '?',
            Self::Hit => 'x',
        }
    }

    /// Parse a single symbol character
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '_' => Some(Self::Miss),
            '?' => Some(Self::Displaced),
            'x' => Some(Self::Hit),
            _ => None,
        }
    }

    const fn digit(self) -> usize {
        match self {
            Self::Miss => 0,
            Self::Displaced => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: usize) -> Self {
        match digit {
            0 => Self::Miss,
            1 => Self::Displaced,
            _ => Self::Hit,
        }
    }
}

/// Error type for invalid pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    UnknownSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must be exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::UnknownSymbol(ch) => {
                write!(f, "Unknown feedback symbol '{ch}' (expected '_', '?' or 'x')")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Feedback pattern for one guess: exactly 5 symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// The all-hits pattern (`xxxxx`), the outcome of guessing the answer
    pub const ALL_HITS: Self = Self([Feedback::Hit; WORD_LENGTH]);

    /// Create a pattern from its symbols
    #[must_use]
    pub const fn new(symbols: [Feedback; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// The per-position symbols
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check whether every position is a hit
    #[must_use]
    pub fn is_all_hits(self) -> bool {
        self == Self::ALL_HITS
    }

    /// The pattern's row index in 0..243
    ///
    /// Position 0 is the most significant base-3 digit, so indices run in the
    /// same order `all()` enumerates.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, symbol| acc * 3 + symbol.digit())
    }

    /// Inverse of [`Pattern::index`]
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 243`
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Pattern index must be < 243");

        let mut symbols = [Feedback::Miss; WORD_LENGTH];
        let mut rest = index;
        for slot in symbols.iter_mut().rev() {
            *slot = Feedback::from_digit(rest % 3);
            rest /= 3;
        }
        Self(symbols)
    }

    /// Enumerate all 243 patterns in deterministic index order
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Pattern;
    ///
    /// let all = Pattern::all();
    /// assert_eq!(all.len(), 243);
    /// assert_eq!(all[0].to_string(), "_____");
    /// assert_eq!(all[242], Pattern::ALL_HITS);
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        (0..Self::COUNT).map(Self::from_index).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut symbols = [Feedback::Miss; WORD_LENGTH];
        for (slot, &ch) in symbols.iter_mut().zip(&chars) {
            *slot = Feedback::from_symbol(ch).ok_or(PatternError::UnknownSymbol(ch))?;
        }

        Ok(Self(symbols))
    }
}

/// Enumerate every symbol sequence of the given length
///
/// Produces `symbols.len()^length` sequences in deterministic order: earlier
/// positions vary slowest, symbols cycle in their input order. Length 0
/// yields the single empty sequence. This is the exhaustive enumerator the
/// precomputation sweeps; `Pattern::all()` is the fixed-length specialization.
#[must_use]
pub fn generate_patterns(symbols: &[Feedback], length: usize) -> Vec<Vec<Feedback>> {
    let mut sequences: Vec<Vec<Feedback>> = vec![Vec::new()];

    for _ in 0..length {
        sequences = sequences
            .into_iter()
            .flat_map(|partial| {
                symbols.iter().map(move |&symbol| {
                    let mut extended = partial.clone();
                    extended.push(symbol);
                    extended
                })
            })
            .collect();
    }

    sequences
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn feedback_symbol_round_trip() {
        for symbol in Feedback::ALL {
            assert_eq!(Feedback::from_symbol(symbol.symbol()), Some(symbol));
        }
        assert_eq!(Feedback::from_symbol('g'), None);
    }

    #[test]
    fn pattern_index_bijection() {
        for index in 0..Pattern::COUNT {
            assert_eq!(Pattern::from_index(index).index(), index);
        }
    }

    #[test]
    fn pattern_all_hits_constant() {
        assert_eq!(Pattern::ALL_HITS.index(), 242);
        assert!(Pattern::ALL_HITS.is_all_hits());
        assert_eq!(Pattern::ALL_HITS.to_string(), "xxxxx");
    }

    #[test]
    fn pattern_all_enumerates_every_index_once() {
        let all = Pattern::all();
        assert_eq!(all.len(), 243);
        for (index, pattern) in all.iter().enumerate() {
            assert_eq!(pattern.index(), index);
        }
    }

    #[test]
    fn pattern_parse_valid() {
        let pattern = Pattern::from_str("xx__x").unwrap();
        assert_eq!(
            pattern.symbols(),
            &[
                Feedback::Hit,
                Feedback::Hit,
                Feedback::Miss,
                Feedback::Miss,
                Feedback::Hit,
            ]
        );
        assert_eq!(pattern.to_string(), "xx__x");
    }

    #[test]
    fn pattern_parse_invalid() {
        assert_eq!(
            Pattern::from_str("xx__"),
            Err(PatternError::InvalidLength(4))
        );
        assert_eq!(
            Pattern::from_str("xx__xx"),
            Err(PatternError::InvalidLength(6))
        );
        assert_eq!(
            Pattern::from_str("xg__x"),
            Err(PatternError::UnknownSymbol('g'))
        );
        assert_eq!(Pattern::from_str(""), Err(PatternError::InvalidLength(0)));
    }

    #[test]
    fn pattern_display_round_trip() {
        for index in [0, 1, 41, 242] {
            let pattern = Pattern::from_index(index);
            assert_eq!(Pattern::from_str(&pattern.to_string()), Ok(pattern));
        }
    }

    #[test]
    fn generate_patterns_counts() {
        assert_eq!(generate_patterns(&Feedback::ALL, 5).len(), 243);
        assert_eq!(generate_patterns(&Feedback::ALL, 2).len(), 9);
        assert_eq!(generate_patterns(&[Feedback::Miss], 4).len(), 1);
    }

    #[test]
    fn generate_patterns_degenerate_length() {
        // Length 0 yields the single empty pattern
        let sequences = generate_patterns(&Feedback::ALL, 0);
        assert_eq!(sequences, vec![Vec::new()]);
    }

    #[test]
    fn generate_patterns_matches_index_order() {
        // The generic enumerator and the index bijection agree on order
        let sequences = generate_patterns(&Feedback::ALL, 5);
        for (index, sequence) in sequences.iter().enumerate() {
            let symbols: [Feedback; 5] = sequence.as_slice().try_into().unwrap();
            assert_eq!(Pattern::new(symbols).index(), index);
        }
    }

    #[test]
    fn generate_patterns_first_position_varies_slowest() {
        let sequences = generate_patterns(&Feedback::ALL, 2);
        assert_eq!(sequences[0], vec![Feedback::Miss, Feedback::Miss]);
        assert_eq!(sequences[1], vec![Feedback::Miss, Feedback::Displaced]);
        assert_eq!(sequences[3], vec![Feedback::Displaced, Feedback::Miss]);
        assert_eq!(sequences[8], vec![Feedback::Hit, Feedback::Hit]);
    }
}
