//! Calc command
//!
//! Ranks the whole dictionary against the answers left by the constraints.

use crate::core::Word;
use crate::solver::minimax::{RankedGuess, best_guess, rank_with_progress};
use crate::solver::{Constraint, SolverError, apply_chain};
use crate::wordlists::WordLists;

/// Ranking of every dictionary word
pub struct CalcResult {
    /// Worst guess first, recommended guess last
    pub ranking: Vec<RankedGuess>,
    pub candidates: Vec<Word>,
    pub best: Word,
}

/// Rank the dictionary against the remaining candidates
///
/// `progress` receives `(completed, total)` guesses.
///
/// # Errors
/// Returns `SolverError::EmptyPool` if the dictionary is empty.
pub fn calc<F>(
    lists: &WordLists,
    constraints: &[Constraint],
    progress: F,
) -> Result<CalcResult, SolverError>
where
    F: FnMut(usize, usize),
{
    let candidates = apply_chain(&lists.answers, constraints);
    let ranking = rank_with_progress(&lists.dictionary, &candidates, progress)?;
    let best = match ranking.last() {
        Some(top) if !candidates.is_empty() => top.word.clone(),
        _ => best_guess(&lists.dictionary, &candidates)?,
    };

    log::info!(
        "best guess {best} against {} candidates",
        candidates.len()
    );
    Ok(CalcResult {
        ranking,
        candidates,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_constraints;
    use crate::solver::minimax::FALLBACK_GUESS;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&["crane", "slate", "irate", "crate", "grate", "gecko", "trice"]),
            words_from_slice(&["crate", "grate", "irate", "trace", "slate"]),
        )
    }

    #[test]
    fn ranks_every_dictionary_word() {
        let constraints = parse_constraints(&["slate", "00222"]).unwrap();
        let mut last_progress = None;

        let result = calc(&lists(), &constraints, |done, total| {
            last_progress = Some((done, total));
        })
        .unwrap();

        assert_eq!(result.ranking.len(), 7);
        assert_eq!(result.candidates.len(), 3);
        assert_eq!(result.best.text(), "trice");
        assert_eq!(result.ranking.last().map(|r| r.word.text()), Some("trice"));
        assert_eq!(last_progress, Some((7, 7)));
    }

    #[test]
    fn marks_candidates_in_ranking() {
        let result = calc(&lists(), &[], |_, _| {}).unwrap();

        for entry in &result.ranking {
            assert_eq!(entry.is_candidate, result.candidates.contains(&entry.word));
        }
    }

    #[test]
    fn impossible_constraints_fall_back() {
        let constraints = parse_constraints(&["zzzzz", "22222"]).unwrap();

        let result = calc(&lists(), &constraints, |_, _| {}).unwrap();

        assert!(result.candidates.is_empty());
        assert_eq!(result.best.text(), FALLBACK_GUESS);
    }
}
