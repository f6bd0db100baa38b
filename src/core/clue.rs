//! Letter clues
//!
//! A clue is a player-supplied constraint about one letter of the unknown
//! answer, used to narrow ranked candidates beyond pattern-based scoring.
//! Kinds are a closed enum so every consumer matches exhaustively; invalid
//! kinds and out-of-range positions are rejected here, at construction, and
//! cannot reach the filter.
//!
//! Textual form (for the CLI): `kind:letter[:position]`, positions 1-based.
//!
//! | kind        | meaning                                    | example    |
//! |-------------|--------------------------------------------|------------|
//! | `exclude`   | letter is not in the word                  | `exclude:z`|
//! | `include`   | letter is somewhere in the word            | `include:e`|
//! | `at`        | letter is at exactly this position         | `at:a:1`   |
//! | `not-at`    | letter is not at this position             | `not-at:r:3`|
//! | `elsewhere` | letter is in the word, not at this position| `elsewhere:o:2`|

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// A single-letter constraint on the unknown answer
///
/// Positions are stored 0-based; constructors take the player's 1-based
/// notation and validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clue {
    /// Letter does not appear anywhere
    Excluded(u8),
    /// Letter appears somewhere
    Included(u8),
    /// Letter appears at exactly this position
    ExactPosition(u8, usize),
    /// Letter does not appear at this position
    NotAtPosition(u8, usize),
    /// Letter appears somewhere, but not at this position
    IncludedNotAt(u8, usize),
}

/// Error type for invalid clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    UnknownKind(String),
    InvalidLetter(char),
    PositionOutOfRange(usize),
    Malformed(String),
}

impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => write!(
                f,
                "Unknown clue kind '{kind}' (expected exclude, include, at, not-at or elsewhere)"
            ),
            Self::InvalidLetter(ch) => {
                write!(f, "Clue letter must be a single ASCII letter, got '{ch}'")
            }
            Self::PositionOutOfRange(pos) => {
                write!(f, "Clue position must be in 1..={WORD_LENGTH}, got {pos}")
            }
            Self::Malformed(spec) => {
                write!(f, "Malformed clue '{spec}' (expected kind:letter[:position])")
            }
        }
    }
}

impl std::error::Error for ClueError {}

fn check_letter(letter: char) -> Result<u8, ClueError> {
    let lowered = letter.to_ascii_lowercase();
    if lowered.is_ascii_lowercase() {
        Ok(lowered as u8)
    } else {
        Err(ClueError::InvalidLetter(letter))
    }
}

fn check_position(position: usize) -> Result<usize, ClueError> {
    if (1..=WORD_LENGTH).contains(&position) {
        Ok(position - 1)
    } else {
        Err(ClueError::PositionOutOfRange(position))
    }
}

impl Clue {
    /// Letter is not in the word
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLetter` for non-alphabetic input.
    pub fn excluded(letter: char) -> Result<Self, ClueError> {
        Ok(Self::Excluded(check_letter(letter)?))
    }

    /// Letter is somewhere in the word
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLetter` for non-alphabetic input.
    pub fn included(letter: char) -> Result<Self, ClueError> {
        Ok(Self::Included(check_letter(letter)?))
    }

    /// Letter is at exactly `position` (1-based)
    ///
    /// # Errors
    /// Returns `ClueError` for a bad letter or position outside 1..=5.
    pub fn exact_position(letter: char, position: usize) -> Result<Self, ClueError> {
        Ok(Self::ExactPosition(
            check_letter(letter)?,
            check_position(position)?,
        ))
    }

    /// Letter is not at `position` (1-based)
    ///
    /// # Errors
    /// Returns `ClueError` for a bad letter or position outside 1..=5.
    pub fn not_at_position(letter: char, position: usize) -> Result<Self, ClueError> {
        Ok(Self::NotAtPosition(
            check_letter(letter)?,
            check_position(position)?,
        ))
    }

    /// Letter is in the word but not at `position` (1-based)
    ///
    /// # Errors
    /// Returns `ClueError` for a bad letter or position outside 1..=5.
    pub fn included_not_at(letter: char, position: usize) -> Result<Self, ClueError> {
        Ok(Self::IncludedNotAt(
            check_letter(letter)?,
            check_position(position)?,
        ))
    }

    /// Parse the textual `kind:letter[:position]` form
    ///
    /// # Errors
    /// Returns `ClueError::UnknownKind` for an unrecognized kind, and the
    /// other variants for bad letters, positions, or field counts.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Clue;
    ///
    /// assert_eq!(Clue::parse("at:a:1").unwrap(), Clue::ExactPosition(b'a', 0));
    /// assert!(Clue::parse("wibble:a").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, ClueError> {
        let fields: Vec<&str> = spec.split(':').collect();

        let malformed = || ClueError::Malformed(spec.to_string());

        let kind = *fields.first().ok_or_else(malformed)?;
        let letter_field = fields.get(1).ok_or_else(malformed)?;
        let mut letters = letter_field.chars();
        let letter = letters.next().ok_or_else(malformed)?;
        if letters.next().is_some() {
            return Err(malformed());
        }

        let position = |index: usize| -> Result<usize, ClueError> {
            if fields.len() != 3 {
                return Err(malformed());
            }
            fields[index].parse().map_err(|_| malformed())
        };

        match kind {
            "exclude" if fields.len() == 2 => Self::excluded(letter),
            "include" if fields.len() == 2 => Self::included(letter),
            "at" => Self::exact_position(letter, position(2)?),
            "not-at" => Self::not_at_position(letter, position(2)?),
            "elsewhere" => Self::included_not_at(letter, position(2)?),
            "exclude" | "include" => Err(malformed()),
            other => Err(ClueError::UnknownKind(other.to_string())),
        }
    }

    /// Evaluate the clue against a candidate word
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        match *self {
            Self::Excluded(letter) => !word.has_letter(letter),
            Self::Included(letter) => word.has_letter(letter),
            Self::ExactPosition(letter, position) => word.char_at(position) == letter,
            Self::NotAtPosition(letter, position) => word.char_at(position) != letter,
            Self::IncludedNotAt(letter, position) => {
                word.has_letter(letter) && word.char_at(position) != letter
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn clue_parse_all_kinds() {
        assert_eq!(Clue::parse("exclude:z").unwrap(), Clue::Excluded(b'z'));
        assert_eq!(Clue::parse("include:e").unwrap(), Clue::Included(b'e'));
        assert_eq!(Clue::parse("at:a:1").unwrap(), Clue::ExactPosition(b'a', 0));
        assert_eq!(
            Clue::parse("not-at:r:3").unwrap(),
            Clue::NotAtPosition(b'r', 2)
        );
        assert_eq!(
            Clue::parse("elsewhere:o:5").unwrap(),
            Clue::IncludedNotAt(b'o', 4)
        );
    }

    #[test]
    fn clue_parse_uppercase_letter_normalized() {
        assert_eq!(Clue::parse("exclude:Z").unwrap(), Clue::Excluded(b'z'));
    }

    #[test]
    fn clue_parse_unknown_kind() {
        assert_eq!(
            Clue::parse("wibble:a"),
            Err(ClueError::UnknownKind("wibble".to_string()))
        );
    }

    #[test]
    fn clue_parse_position_out_of_range() {
        assert_eq!(
            Clue::parse("at:a:0"),
            Err(ClueError::PositionOutOfRange(0))
        );
        assert_eq!(
            Clue::parse("at:a:6"),
            Err(ClueError::PositionOutOfRange(6))
        );
    }

    #[test]
    fn clue_parse_malformed() {
        assert!(matches!(Clue::parse("at:a"), Err(ClueError::Malformed(_))));
        assert!(matches!(
            Clue::parse("exclude:a:2"),
            Err(ClueError::Malformed(_))
        ));
        assert!(matches!(
            Clue::parse("at:ab:1"),
            Err(ClueError::Malformed(_))
        ));
        assert!(matches!(
            Clue::parse("at:a:one"),
            Err(ClueError::Malformed(_))
        ));
    }

    #[test]
    fn clue_parse_invalid_letter() {
        assert_eq!(Clue::parse("exclude:4"), Err(ClueError::InvalidLetter('4')));
    }

    #[test]
    fn clue_excluded_permits() {
        let clue = Clue::excluded('z').unwrap();
        assert!(clue.permits(&word("apple")));
        assert!(!clue.permits(&word("zebra")));
    }

    #[test]
    fn clue_included_permits() {
        let clue = Clue::included('p').unwrap();
        assert!(clue.permits(&word("apple")));
        assert!(!clue.permits(&word("grain")));
    }

    #[test]
    fn clue_exact_position_permits() {
        let clue = Clue::exact_position('a', 1).unwrap();
        assert!(clue.permits(&word("apple")));
        assert!(!clue.permits(&word("grape")));
    }

    #[test]
    fn clue_not_at_position_permits() {
        let clue = Clue::not_at_position('a', 1).unwrap();
        assert!(!clue.permits(&word("apple")));
        assert!(clue.permits(&word("grape")));
    }

    #[test]
    fn clue_included_not_at_permits() {
        let clue = Clue::included_not_at('a', 1).unwrap();
        assert!(clue.permits(&word("grape"))); // Has 'a', not first
        assert!(!clue.permits(&word("apple"))); // 'a' at first position
        assert!(!clue.permits(&word("booth"))); // No 'a' at all
    }
}
