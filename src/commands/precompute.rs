//! Precompute command
//!
//! Builds the match-count table for a pool and persists it as JSON.

use crate::core::Word;
use crate::index::build_index_with_progress;
use crate::store;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a precompute run
pub struct PrecomputeConfig {
    /// Where to write the JSON table
    pub output: PathBuf,
    /// Whether to render a progress bar while rows are computed
    pub show_progress: bool,
}

/// Summary of a completed precompute run
pub struct PrecomputeSummary {
    pub pool_size: usize,
    pub duration: Duration,
    pub output: PathBuf,
}

/// Build and persist the match-count table
///
/// # Errors
/// Fails on an empty pool or if the table cannot be written.
pub fn run_precompute(pool: &[Word], config: &PrecomputeConfig) -> Result<PrecomputeSummary> {
    let bar = if config.show_progress {
        let bar = ProgressBar::new(pool.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let table = build_index_with_progress(pool, || bar.inc(1))
        .context("precomputing match counts")?;
    bar.finish_and_clear();

    store::save(&table, &config.output)
        .with_context(|| format!("writing table to {}", config.output.display()))?;

    Ok(PrecomputeSummary {
        pool_size: pool.len(),
        duration: start.elapsed(),
        output: config.output.clone(),
    })
}
