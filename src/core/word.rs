//! Wordle word representation
//!
//! A Word stores a validated 5-letter lowercase word along with a letter
//! bitmask used for constraint checks and unique-letter counting.

use std::fmt;

/// Number of letters in every word and pattern
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Stores the word as bytes plus a 26-bit mask of the letters it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letter_mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        let mut letter_mask = 0u32;
        for &ch in &chars {
            letter_mask |= 1 << (ch - b'a');
        }

        Ok(Self {
            text,
            chars,
            letter_mask,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letter_mask & (1 << (letter - b'a')) != 0
    }

    /// Bitmask of the letters this word contains (bit 0 = 'a')
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letter_mask
    }

    /// Count of distinct letters in the word
    ///
    /// Repeated letters count once: "sheen" has 4 unique letters.
    /// Used by weighted scoring to favor information-dense guesses.
    #[inline]
    #[must_use]
    pub const fn unique_letters(&self) -> u32 {
        self.letter_mask.count_ones()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
