//! Wordle Ranker - CLI
//!
//! Precomputes feedback-pattern match counts for a word pool and ranks
//! candidates against observed feedback, optionally narrowed by letter clues.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_ranker::{
    commands::{PrecomputeConfig, RankConfig, run_precompute, run_rank},
    core::{Clue, Pattern, Word},
    output::{print_precompute_summary, print_rank_outcome},
    store,
    wordlists::loader::{load_encoded, load_from_file, shuffle_pool},
};

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Rank Wordle guesses by how much of the candidate pool they keep in play",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list path (plain text, or a JSON array of base64 words with --encoded)
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    wordlist: PathBuf,

    /// Treat the word list as a JSON array of base64-encoded words
    #[arg(long, global = true)]
    encoded: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the match-count table and persist it as JSON
    Precompute {
        /// Output path for the table
        #[arg(short, long, default_value = "data/processed_words.json")]
        output: PathBuf,

        /// Shuffle the pool before building
        #[arg(long)]
        shuffle: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rank candidates against observed feedback patterns
    Rank {
        /// Observed patterns in `_?x` notation, one per prior guess
        patterns: Vec<String>,

        /// Path to a previously precomputed table
        #[arg(short, long, default_value = "data/processed_words.json")]
        index: PathBuf,

        /// Letter clue `kind:letter[:position]` (e.g. at:a:1, exclude:z); repeatable
        #[arg(short, long = "clue")]
        clues: Vec<String>,

        /// Weight scores by each word's distinct-letter count
        #[arg(long)]
        weighted: bool,

        /// Show only the top N candidates
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the candidate pool according to the global flags
fn load_pool(path: &PathBuf, encoded: bool) -> Result<Vec<Word>> {
    let pool = if encoded {
        load_encoded(path)
            .with_context(|| format!("loading encoded word list {}", path.display()))?
    } else {
        load_from_file(path).with_context(|| format!("loading word list {}", path.display()))?
    };
    Ok(pool)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut pool = load_pool(&cli.wordlist, cli.encoded)?;

    match cli.command {
        Commands::Precompute {
            output,
            shuffle,
            quiet,
        } => {
            if shuffle {
                shuffle_pool(&mut pool);
            }

            let config = PrecomputeConfig {
                output,
                show_progress: !quiet,
            };
            let summary = run_precompute(&pool, &config)?;
            print_precompute_summary(&summary);
            Ok(())
        }
        Commands::Rank {
            patterns,
            index,
            clues,
            weighted,
            limit,
        } => {
            let observed = patterns
                .iter()
                .map(|s| s.parse::<Pattern>().map_err(anyhow::Error::from))
                .collect::<Result<Vec<_>>>()?;
            let clues = clues
                .iter()
                .map(|s| Clue::parse(s).map_err(anyhow::Error::from))
                .collect::<Result<Vec<_>>>()?;

            let table = store::load(&index)
                .with_context(|| format!("loading precomputed table {}", index.display()))?;

            let config = RankConfig {
                observed,
                clues,
                weighted,
                limit,
            };
            let outcome = run_rank(&pool, &table, &config);
            print_rank_outcome(&outcome);
            Ok(())
        }
    }
}
