//! Lookahead command
//!
//! Two-ply evaluation of a chosen first guess against the answers left by
//! the constraints.

use crate::core::Word;
use crate::solver::{Constraint, Lookahead, SolverError, apply_chain, lookahead_with_progress};
use crate::wordlists::WordLists;

/// Evaluate `first_guess` two plies deep
///
/// `progress` receives `(completed, total)` feedback buckets.
///
/// # Errors
/// Returns `SolverError::EmptyPool` if the dictionary is empty.
pub fn run_lookahead<F>(
    lists: &WordLists,
    first_guess: &Word,
    constraints: &[Constraint],
    progress: F,
) -> Result<Lookahead, SolverError>
where
    F: FnMut(usize, usize),
{
    let candidates = apply_chain(&lists.answers, constraints);
    let result = lookahead_with_progress(&lists.dictionary, &candidates, first_guess, progress)?;

    log::info!(
        "{first_guess}: {} buckets, two-ply worst case {}",
        result.buckets.len(),
        result.worst_case()
    );
    Ok(result)
}
