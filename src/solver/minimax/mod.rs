//! Minimax-based guess ranking
//!
//! Scores guesses by the worst case they leave behind and orders them.

mod calculator;
mod selector;

pub use calculator::{partition, worst_case_size};
pub use selector::{FALLBACK_GUESS, RankedGuess, best_guess, rank, rank_with_progress};
