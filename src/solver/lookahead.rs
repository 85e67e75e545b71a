//! Two-ply lookahead
//!
//! Fixes a first guess, splits the candidates into the feedback buckets it
//! can produce, and finds the best reply inside each bucket with the same
//! minimax ranking used for the first guess.

use super::SolverError;
use super::minimax::{partition, rank};
use crate::core::{Feedback, Word};

/// Best second guess for one feedback bucket of the first guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReply {
    pub feedback: Feedback,
    /// Candidates that produce `feedback` for the first guess
    pub bucket_size: usize,
    pub reply: Word,
    /// Worst case left inside the bucket after playing `reply`
    pub worst_case: usize,
}

/// Two-ply evaluation of a fixed first guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookahead {
    pub first_guess: Word,
    /// One entry per reachable feedback, in ascending feedback order
    pub buckets: Vec<BucketReply>,
}

impl Lookahead {
    /// Worst case over all buckets after the best reply
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.buckets.iter().map(|b| b.worst_case).max().unwrap_or(0)
    }

    /// Number of candidates covered by the buckets
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.buckets.iter().map(|b| b.bucket_size).sum()
    }
}

/// Evaluate `first_guess` two plies deep
///
/// Buckets that no candidate reaches are skipped.
///
/// # Errors
/// Returns `SolverError::EmptyPool` if `guess_pool` is empty.
pub fn lookahead(
    guess_pool: &[Word],
    candidates: &[Word],
    first_guess: &Word,
) -> Result<Lookahead, SolverError> {
    lookahead_with_progress(guess_pool, candidates, first_guess, |_, _| {})
}

/// Same as [`lookahead`], reporting `(completed, total)` buckets
///
/// # Errors
/// Returns `SolverError::EmptyPool` if `guess_pool` is empty.
pub fn lookahead_with_progress<F>(
    guess_pool: &[Word],
    candidates: &[Word],
    first_guess: &Word,
    mut progress: F,
) -> Result<Lookahead, SolverError>
where
    F: FnMut(usize, usize),
{
    if guess_pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }

    let groups = partition(candidates, first_guess);
    let total = groups.len();
    log::debug!(
        "{first_guess} splits {} candidates into {total} buckets",
        candidates.len()
    );

    let mut buckets = Vec::with_capacity(total);
    for feedback in Feedback::ALL {
        let Some(group) = groups.get(&feedback) else {
            continue;
        };
        let bucket: Vec<Word> = group.iter().map(|&w| w.clone()).collect();
        let best = rank(guess_pool, &bucket)?
            .pop()
            .ok_or(SolverError::EmptyPool)?;

        buckets.push(BucketReply {
            feedback,
            bucket_size: bucket.len(),
            reply: best.word,
            worst_case: best.worst_case,
        });
        progress(buckets.len(), total);
    }

    Ok(Lookahead {
        first_guess: first_guess.clone(),
        buckets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::filter;
    use crate::solver::minimax::best_guess;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn reply_summary(result: &Lookahead) -> Vec<(String, usize, &str, usize)> {
        result
            .buckets
            .iter()
            .map(|b| (b.feedback.to_string(), b.bucket_size, b.reply.text(), b.worst_case))
            .collect()
    }

    #[test]
    fn replies_minimize_within_each_bucket() {
        let words = words(&["crane", "slate", "irate", "crate", "grate"]);
        let first = Word::new("slate").unwrap();

        let result = lookahead(&words, &words, &first).unwrap();

        assert_eq!(
            reply_summary(&result),
            vec![
                ("00202".to_string(), 1, "crane", 1),
                ("00222".to_string(), 3, "grate", 2),
                ("22222".to_string(), 1, "slate", 1),
            ]
        );
        assert_eq!(result.worst_case(), 2);
        assert_eq!(result.total_candidates(), 5);
    }

    #[test]
    fn buckets_match_filter_and_best_guess() {
        let pool = words(&["crane", "slate", "irate", "crate", "grate", "gecko", "trice"]);
        let candidates = words(&["crate", "grate", "irate", "trace", "slate"]);
        let first = Word::new("crane").unwrap();

        let result = lookahead(&pool, &candidates, &first).unwrap();

        for bucket in &result.buckets {
            let members = filter(&candidates, &first, bucket.feedback);
            assert_eq!(members.len(), bucket.bucket_size);
            assert_eq!(best_guess(&pool, &members).unwrap(), bucket.reply);
        }
        assert_eq!(result.total_candidates(), candidates.len());
    }

    #[test]
    fn progress_counts_buckets() {
        let words = words(&["crane", "slate", "irate", "crate", "grate"]);
        let first = Word::new("slate").unwrap();
        let mut seen = Vec::new();

        lookahead_with_progress(&words, &words, &first, |done, total| seen.push((done, total)))
            .unwrap();

        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let candidates = words(&["crane"]);
        let first = Word::new("crane").unwrap();
        assert_eq!(
            lookahead(&[], &candidates, &first),
            Err(SolverError::EmptyPool)
        );
    }

    #[test]
    fn no_candidates_means_no_buckets() {
        let pool = words(&["crane"]);
        let result = lookahead(&pool, &[], &pool[0]).unwrap();
        assert!(result.buckets.is_empty());
        assert_eq!(result.worst_case(), 0);
    }
}
