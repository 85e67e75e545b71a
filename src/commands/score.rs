//! Score command
//!
//! Computes the feedback a guess receives against a known answer.

use crate::core::{Feedback, FeedbackError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub answer: String,
    pub guess: String,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// # Errors
/// Returns `FeedbackError` if either word has the wrong length or is not a
/// valid word.
pub fn score_words(answer: &str, guess: &str) -> Result<ScoreResult, FeedbackError> {
    let feedback = Feedback::score(answer, guess)?;

    Ok(ScoreResult {
        answer: answer.to_lowercase(),
        guess: guess.to_lowercase(),
        feedback,
    })
}
