//! Main Wordle solver interface

use super::SolverError;
use super::filter::{Constraint, apply_chain};
use super::minimax::best_guess;
use crate::core::Word;

/// Which words the solver may guess after the opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Only words that are still possible answers
    #[default]
    Candidates,
    /// Every word in the dictionary
    Dictionary,
}

/// Main Wordle solver
///
/// Holds the immutable word lists and derives everything else from the
/// constraint history it is handed.
pub struct Solver<'a> {
    dictionary: &'a [Word],
    answers: &'a [Word],
    opening: Word,
    guess_pool: GuessPool,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `dictionary`: All valid guessable words
    /// - `answers`: Words that can be the hidden answer
    /// - `opening`: First guess of every game
    #[must_use]
    pub fn new(dictionary: &'a [Word], answers: &'a [Word], opening: Word) -> Self {
        Self {
            dictionary,
            answers,
            opening,
            guess_pool: GuessPool::Candidates,
        }
    }

    #[must_use]
    pub fn with_guess_pool(mut self, guess_pool: GuessPool) -> Self {
        self.guess_pool = guess_pool;
        self
    }

    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    /// Answers consistent with every constraint in `history`
    #[must_use]
    pub fn candidates(&self, history: &[Constraint]) -> Vec<Word> {
        apply_chain(self.answers, history)
    }

    /// Get the next guess given the constraint history
    ///
    /// Plays the opening word first, then the minimax best guess.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if no answer fits the history, or
    /// `SolverError::EmptyPool` if the dictionary is empty.
    pub fn next_guess(&self, history: &[Constraint]) -> Result<Word, SolverError> {
        if history.is_empty() {
            return Ok(self.opening.clone());
        }

        let candidates = self.candidates(history);
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        match self.guess_pool {
            GuessPool::Candidates => best_guess(&candidates, &candidates),
            GuessPool::Dictionary => best_guess(self.dictionary, &candidates),
        }
    }
}
