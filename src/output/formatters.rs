//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};
use colored::Colorize;

/// Render a pattern with colored symbols: green hits, yellow displaced,
/// dimmed misses
#[must_use]
pub fn pattern_glyphs(pattern: &Pattern) -> String {
    pattern
        .symbols()
        .iter()
        .map(|symbol| {
            let glyph = symbol.symbol().to_string();
            match symbol {
                Feedback::Hit => glyph.green().bold().to_string(),
                Feedback::Displaced => glyph.yellow().to_string(),
                Feedback::Miss => glyph.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a score bar string
#[must_use]
pub fn score_bar(score: u64, max_score: u64, width: usize) -> String {
    let filled = if max_score == 0 {
        0
    } else {
        ((score as f64 / max_score as f64) * width as f64) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pattern_glyphs_keeps_notation() {
        // Strip ANSI color codes by checking the symbols survive in order
        colored::control::set_override(false);
        let rendered = pattern_glyphs(&Pattern::from_str("x?_x_").unwrap());
        colored::control::unset_override();

        assert_eq!(rendered, "x?_x_");
    }

    #[test]
    fn score_bar_empty() {
        assert_eq!(score_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn score_bar_full() {
        assert_eq!(score_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn score_bar_half() {
        assert_eq!(score_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn score_bar_zero_max() {
        assert_eq!(score_bar(0, 0, 4), "░░░░");
    }
}
