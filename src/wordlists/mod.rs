//! Word lists for Wordle solving
//!
//! [`WordLists`] is loaded once at startup and borrowed by every command.

pub mod loader;

use crate::core::Word;
use anyhow::{Context, Result, bail};
use loader::{LinePolicy, load_from_file};
use std::path::Path;

/// The guessable dictionary and the list of possible answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    pub dictionary: Vec<Word>,
    pub answers: Vec<Word>,
}

impl WordLists {
    #[must_use]
    pub const fn new(dictionary: Vec<Word>, answers: Vec<Word>) -> Self {
        Self {
            dictionary,
            answers,
        }
    }

    /// Load the dictionary and, optionally, a separate answer list
    ///
    /// Without an answer file the dictionary doubles as the answer list.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or holds no valid words.
    pub fn load(dictionary: &Path, answers: Option<&Path>, policy: LinePolicy) -> Result<Self> {
        let dictionary_words = load_list(dictionary, policy)?;
        let answer_words = match answers {
            Some(path) => load_list(path, policy)?,
            None => dictionary_words.clone(),
        };

        log::info!(
            "loaded {} dictionary words and {} answers",
            dictionary_words.len(),
            answer_words.len()
        );
        Ok(Self::new(dictionary_words, answer_words))
    }
}

fn load_list(path: &Path, policy: LinePolicy) -> Result<Vec<Word>> {
    let words = load_from_file(path, policy)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    if words.is_empty() {
        bail!("word list {} contains no valid words", path.display());
    }
    Ok(words)
}
