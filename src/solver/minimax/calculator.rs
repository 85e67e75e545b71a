//! Feedback partitions and their largest group
//! The size of the largest group is the quantity the ranker minimizes.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Largest number of candidates `guess` can leave standing
///
/// Every candidate is treated as the hidden answer in turn and tallied under
/// the feedback `guess` would receive. `guess` need not be a candidate. An
/// empty candidate list yields 0.
///
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::minimax::worst_case_size;
///
/// let crane = Word::new("crane").unwrap();
/// let candidates: Vec<Word> = ["slate", "irate", "grate"]
///     .iter()
///     .map(|w| w.parse().unwrap())
///     .collect();
///
/// // IRATE and GRATE both answer CRANE with 02202
/// assert_eq!(worst_case_size(&candidates, &crane), 2);
/// ```
#[must_use]
pub fn worst_case_size(candidates: &[Word], guess: &Word) -> usize {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    let mut worst = 0;

    for candidate in candidates {
        let count = counts
            .entry(Feedback::encode(candidate, guess))
            .or_insert(0);
        *count += 1;
        worst = worst.max(*count);
    }

    worst
}

/// Group candidates by the feedback they produce with the guess
///
/// Groups are disjoint, keep candidate order, and together hold every
/// candidate exactly once.
#[must_use]
pub fn partition<'a>(candidates: &'a [Word], guess: &Word) -> FxHashMap<Feedback, Vec<&'a Word>> {
    let mut groups: FxHashMap<Feedback, Vec<&'a Word>> = FxHashMap::default();

    for candidate in candidates {
        groups
            .entry(Feedback::encode(candidate, guess))
            .or_default()
            .push(candidate);
    }

    groups
}
