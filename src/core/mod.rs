//! Core domain types for Wordle
//!
//! Words and the feedback they produce. Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{FEEDBACK_COUNT, Feedback, FeedbackError, Mark};
pub use word::{WORD_LEN, Word, WordError};
