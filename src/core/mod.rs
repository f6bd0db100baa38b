//! Core domain types
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod clue;
mod feedback;
mod word;

pub use clue::{Clue, ClueError};
pub use feedback::{Feedback, Pattern, PatternError, generate_patterns};
pub use word::{WORD_LENGTH, Word, WordError};
