//! Word list loading utilities
//!
//! Word lists are plain text with one word per line. Lines are trimmed,
//! blank lines and `#` comments are skipped, and duplicates are dropped.

use crate::core::{WORD_LEN, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// How lines that are not exactly one word long are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePolicy {
    /// Skip lines that are not exactly `WORD_LEN` letters
    #[default]
    Strict,
    /// Keep the first `WORD_LEN` characters of longer lines
    Truncate,
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::wordlists::loader::{LinePolicy, load_from_file};
///
/// let words = load_from_file("words.txt", LinePolicy::Strict).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, policy: LinePolicy) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, policy))
}

/// Parse word list text
///
/// Invalid lines are skipped with a warning.
#[must_use]
pub fn parse_words(content: &str, policy: LinePolicy) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let text: String = match policy {
            LinePolicy::Strict => trimmed.to_string(),
            LinePolicy::Truncate => trimmed.chars().take(WORD_LEN).collect(),
        };

        match Word::new(text) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                } else {
                    log::debug!("line {}: duplicate word '{word}'", number + 1);
                }
            }
            Err(e) => log::warn!("line {}: skipping '{trimmed}': {e}", number + 1),
        }
    }

    words
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_minimax::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "bad"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(texts(&words), vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "12345", "slate"]);

        assert_eq!(texts(&words), vec!["crane", "slate"]);
    }

    #[test]
    fn strict_policy_skips_long_lines() {
        let content = "crane\n  Slate  \n\n# comment\nirates\nab\n";
        let words = parse_words(content, LinePolicy::Strict);

        assert_eq!(texts(&words), vec!["crane", "slate"]);
    }

    #[test]
    fn truncate_policy_keeps_word_prefix() {
        let content = "crane\nirates\nsalet 3.42\nab\n";
        let words = parse_words(content, LinePolicy::Truncate);

        assert_eq!(texts(&words), vec!["crane", "irate", "salet"]);
    }

    #[test]
    fn duplicates_are_dropped() {
        let words = parse_words("crane\nCRANE\nslate\ncrane\n", LinePolicy::Strict);

        assert_eq!(texts(&words), vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_minimax_{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_from_file(&path, LinePolicy::Strict).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(texts(&words), vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/nonexistent/wordle_minimax/words.txt", LinePolicy::Strict);
        assert!(result.is_err());
    }
}
