//! Wordle Minimax
//!
//! Ranks Wordle guesses by the largest group of candidates they can leave
//! indistinguishable, and recommends the guess that minimizes it.
//!
//! # Example
//!
//! ```rust
//! use wordle_minimax::core::{Feedback, Word};
//! use wordle_minimax::solver::minimax::best_guess;
//!
//! let slate: Word = "slate".parse().unwrap();
//! let crane: Word = "crane".parse().unwrap();
//! assert_eq!(Feedback::encode(&slate, &crane).to_string(), "00202");
//!
//! // once only SLATE remains, guessing it beats anything else
//! let pool = vec![crane, slate.clone()];
//! let candidates = vec![slate];
//! assert_eq!(best_guess(&pool, &candidates).unwrap().text(), "slate");
//! ```

// Words and feedback codes
pub mod core;

// Filtering, ranking and lookahead
pub mod solver;

// Dictionary and answer list loading
pub mod wordlists;

// One entry point per CLI subcommand
pub mod commands;

// Printing results and progress
pub mod output;
