//! Display functions for command results

use super::formatters::{pattern_glyphs, score_bar};
use crate::commands::{PrecomputeSummary, RankOutcome};
use colored::Colorize;

/// Print the summary of a precompute run
pub fn print_precompute_summary(summary: &PrecomputeSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "PRECOMPUTATION COMPLETE".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("   Pool size:   {}", summary.pool_size);
    println!("   Time taken:  {:.2}s", summary.duration.as_secs_f64());
    println!(
        "   Written to:  {}",
        summary.output.display().to_string().bright_yellow()
    );
}

/// Print a ranked candidate list
///
/// Distinguishes the empty outcome ("no viable candidates remain") from a
/// populated ranking.
pub fn print_rank_outcome(outcome: &RankOutcome) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RANKED CANDIDATES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Pool: {}   Survived scoring: {}   After clues: {}",
        outcome.pool_size,
        outcome.scored,
        outcome.results.len()
    );
    if outcome.weighted {
        println!("   Scores weighted by distinct-letter count");
    }

    if outcome.results.is_empty() {
        println!("\n{}", "No viable candidates remain".yellow().bold());
        return;
    }

    let shown = outcome.limit.unwrap_or(outcome.results.len());
    let top_score = outcome.results[0].score;

    println!();
    for (position, entry) in outcome.results.iter().take(shown).enumerate() {
        println!(
            "   {:>3}. {} [{}] {}",
            position + 1,
            entry.word.text().to_uppercase().bright_yellow().bold(),
            score_bar(entry.score, top_score, 24).green(),
            entry.score
        );
    }

    if outcome.results.len() > shown {
        println!("   ... and {} more", outcome.results.len() - shown);
    }

    // Per-pattern breakdown of the leader, if any patterns were observed
    let best = &outcome.results[0];
    if !best.contributions.is_empty() {
        println!(
            "\n   Best guess {} by pattern:",
            best.word.text().to_uppercase().bold()
        );
        for (pattern, count) in &best.contributions {
            println!("      {}  {}", pattern_glyphs(pattern), count);
        }
    }
}
