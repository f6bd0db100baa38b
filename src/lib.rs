//! Wordle Ranker
//!
//! A decision-support engine for Wordle: precomputes, for every candidate
//! word and every possible feedback pattern, how many pool words are
//! consistent with that outcome, then ranks candidates by how much of the
//! pool their observed feedback keeps in play.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::core::Word;
//! use wordle_ranker::index::build_index;
//! use wordle_ranker::scorer::rank;
//!
//! let pool = vec![
//!     Word::new("apple").unwrap(),
//!     Word::new("ample").unwrap(),
//!     Word::new("angle").unwrap(),
//! ];
//!
//! // Built once, persisted via `store` for repeat runs
//! let table = build_index(&pool).unwrap();
//!
//! // First-guess mode: no feedback observed yet, weighted by letter diversity
//! let ranked = rank(&pool, &table, &[], true);
//! assert_eq!(ranked.len(), 3);
//! ```

// Core domain types
pub mod core;

// Pattern-constraint compilation and evaluation
pub mod matcher;

// Match-count precomputation
pub mod index;

// Table persistence
pub mod store;

// Candidate scoring and ranking
pub mod scorer;

// Knowledge filter over ranked results
pub mod filter;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
