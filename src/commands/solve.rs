//! Solve command
//!
//! Narrows the answer list with the given constraints.

use crate::core::Word;
use crate::solver::{Constraint, apply_chain};
use crate::wordlists::WordLists;

/// Answers left after applying the constraints
pub struct SolveResult {
    pub candidates: Vec<Word>,
}

/// Apply `constraints` to the answer list
#[must_use]
pub fn solve(lists: &WordLists, constraints: &[Constraint]) -> SolveResult {
    let candidates = apply_chain(&lists.answers, constraints);
    log::info!(
        "{} of {} answers fit {} constraints",
        candidates.len(),
        lists.answers.len(),
        constraints.len()
    );

    SolveResult { candidates }
}
