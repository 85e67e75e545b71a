//! Guess and answer words
//!
//! Words are lowercase ASCII and exactly [`WORD_LEN`] letters long. Both
//! invariants are checked once, at construction.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A validated five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

/// Why a string was rejected as a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected a {WORD_LEN}-letter word, got {len} characters")
            }
            Self::NonAscii => write!(f, "word has non-ASCII characters"),
            Self::InvalidCharacters => write!(f, "word may only contain the letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validate and normalize `text` into a word
    ///
    /// Uppercase input is folded to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` for non-ASCII text, text that is not five
    /// characters long, or characters outside `a-z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    ///
    /// assert_eq!(Word::new("Raise").unwrap().text(), "raise");
    /// assert!(Word::new("rais").is_err());
    /// assert!(Word::new("ra1se").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().to_lowercase();
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;
        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`.
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// One removable token per letter occurrence
    ///
    /// Feedback calculation consumes tokens from this pool so a letter is
    /// never credited more often than it appears.
    pub(crate) fn letter_pool(&self) -> FxHashMap<u8, u8> {
        let mut pool = FxHashMap::default();
        for &letter in &self.letters {
            *pool.entry(letter).or_insert(0) += 1;
        }
        pool
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
