//! Wordle solving algorithms
//!
//! Constraint filtering, minimax ranking and two-ply lookahead. Nothing in
//! here performs I/O or keeps state between calls.

mod engine;
mod error;
mod filter;
pub mod lookahead;
pub mod minimax;

pub use engine::{GuessPool, Solver};
pub use error::SolverError;
pub use filter::{Constraint, apply_chain, filter};
pub use lookahead::{BucketReply, Lookahead, lookahead, lookahead_with_progress};
