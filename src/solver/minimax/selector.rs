//! Minimax guess ranking
//!
//! Ranks a guess pool by worst-case remaining candidates. The ranking runs
//! from worst guess to best, so the recommended guess is the last entry.

use super::calculator::worst_case_size;
use crate::core::Word;
use crate::solver::SolverError;
use rustc_hash::FxHashSet;

/// Guess recommended when no candidates are left to rank against
pub const FALLBACK_GUESS: &str = "raise";

/// How often (in evaluated guesses) the progress callback fires
const PROGRESS_INTERVAL: usize = 64;

/// A pool word paired with its minimax score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGuess {
    pub word: Word,
    /// Largest group of candidates left indistinguishable by this guess
    pub worst_case: usize,
    /// Whether the word is itself a remaining candidate
    pub is_candidate: bool,
}

/// Rank every word in `guess_pool` against `candidates`
///
/// Ordering:
/// 1. worst-case size, descending
/// 2. on ties, non-candidates before candidates
/// 3. otherwise pool order
///
/// # Errors
/// Returns `SolverError::EmptyPool` if `guess_pool` is empty.
pub fn rank(guess_pool: &[Word], candidates: &[Word]) -> Result<Vec<RankedGuess>, SolverError> {
    rank_with_progress(guess_pool, candidates, |_, _| {})
}

/// Same as [`rank`], reporting `(completed, total)` as guesses are evaluated
///
/// The callback fires every few dozen guesses and once at the end. It has no
/// influence on the result.
///
/// # Errors
/// Returns `SolverError::EmptyPool` if `guess_pool` is empty.
pub fn rank_with_progress<F>(
    guess_pool: &[Word],
    candidates: &[Word],
    mut progress: F,
) -> Result<Vec<RankedGuess>, SolverError>
where
    F: FnMut(usize, usize),
{
    if guess_pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }

    let total = guess_pool.len();
    let members: FxHashSet<&Word> = candidates.iter().collect();
    let mut ranked = Vec::with_capacity(total);

    for (i, guess) in guess_pool.iter().enumerate() {
        ranked.push(RankedGuess {
            word: guess.clone(),
            worst_case: worst_case_size(candidates, guess),
            is_candidate: members.contains(guess),
        });
        if (i + 1) % PROGRESS_INTERVAL == 0 {
            progress(i + 1, total);
        }
    }
    progress(total, total);

    // Stable: equal keys keep pool order
    ranked.sort_by(|a, b| {
        b.worst_case
            .cmp(&a.worst_case)
            .then(a.is_candidate.cmp(&b.is_candidate))
    });

    log::debug!(
        "ranked {} guesses against {} candidates",
        total,
        candidates.len()
    );
    Ok(ranked)
}

/// Select the guess that minimizes worst-case remaining candidates
///
/// This is the last entry of [`rank`]: the smallest worst case, preferring a
/// word that could itself be the answer. With no candidates left, returns
/// [`FALLBACK_GUESS`].
///
/// # Errors
/// Returns `SolverError::EmptyPool` if `guess_pool` is empty.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::minimax::best_guess;
///
/// let guesses = vec![
///     Word::new("zzzzz").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let best = best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "crane");
/// ```
pub fn best_guess(guess_pool: &[Word], candidates: &[Word]) -> Result<Word, SolverError> {
    if guess_pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }
    if candidates.is_empty() {
        return Ok(Word::new(FALLBACK_GUESS)?);
    }

    rank(guess_pool, candidates)?
        .pop()
        .map(|ranked| ranked.word)
        .ok_or(SolverError::EmptyPool)
}
