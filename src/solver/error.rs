//! Errors raised by the ranking engine

use crate::core::WordError;
use std::fmt;

/// Error type for guess selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The guess pool handed to the ranker was empty
    EmptyPool,
    /// No answer is consistent with the constraint history
    NoCandidates,
    /// A configured word (fallback or opening) failed validation
    InvalidWord(WordError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Cannot rank guesses from an empty guess pool"),
            Self::NoCandidates => write!(f, "No candidates are consistent with the constraints"),
            Self::InvalidWord(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<WordError> for SolverError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
