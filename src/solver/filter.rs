//! Constraint filtering
//!
//! A constraint is an observed (guess, feedback) pair. A word survives a
//! constraint when, taken as the answer, it would have produced exactly that
//! feedback for that guess.

use crate::core::{Feedback, Word};
use std::fmt;

/// An observed guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub guess: Word,
    pub feedback: Feedback,
}

impl Constraint {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// The constraint produced by playing `guess` when `answer` is hidden
    #[must_use]
    pub fn observe(answer: &Word, guess: Word) -> Self {
        let feedback = Feedback::encode(answer, &guess);
        Self { guess, feedback }
    }

    /// Whether `word` could still be the answer under this constraint
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        Feedback::encode(word, &self.guess) == self.feedback
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}

/// Keep the words of `pool` that would answer `guess` with `target`
///
/// Pool order is preserved.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Feedback, Word};
/// use wordle_minimax::solver::filter;
///
/// let pool = vec![Word::new("slate").unwrap(), Word::new("crane").unwrap()];
/// let guess = Word::new("crane").unwrap();
///
/// let remaining = filter(&pool, &guess, "00202".parse().unwrap());
/// assert_eq!(remaining, vec![Word::new("slate").unwrap()]);
/// ```
#[must_use]
pub fn filter(pool: &[Word], guess: &Word, target: Feedback) -> Vec<Word> {
    let constraint = Constraint::new(guess.clone(), target);
    pool.iter()
        .filter(|word| constraint.admits(word))
        .cloned()
        .collect()
}

/// Apply a chain of constraints to `pool`, left to right
#[must_use]
pub fn apply_chain(pool: &[Word], chain: &[Constraint]) -> Vec<Word> {
    chain.iter().fold(pool.to_vec(), |words, constraint| {
        filter(&words, &constraint.guess, constraint.feedback)
    })
}
