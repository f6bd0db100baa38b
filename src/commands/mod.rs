//! Command implementations

pub mod precompute;
pub mod rank;

pub use precompute::{PrecomputeConfig, PrecomputeSummary, run_precompute};
pub use rank::{RankConfig, RankOutcome, run_rank};
