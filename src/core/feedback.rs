//! Wordle feedback calculation and representation
//!
//! Feedback is serialized as a decimal code, one digit per position with
//! position 0 as the most significant digit:
//! - 0 = Absent (letter not left in the answer)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Exact (letter in the correct position)
//!
//! Only codes built from the digits 0-2 are valid, so the 243 possible
//! values are scattered over `0..=22222`. [`Feedback::ALL`] lists them.

use super::word::{WORD_LEN, Word, WordError};
use std::fmt;
use std::str::FromStr;

/// Number of distinct feedback values (3^5)
pub const FEEDBACK_COUNT: usize = 243;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    /// Digit used for this mark in the canonical code
    #[must_use]
    pub const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Feedback for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u32);

/// Errors produced while building feedback from text or raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Answer and guess are not both `WORD_LEN` letters long
    LengthMismatch { answer: usize, guess: usize },
    /// Text or code that is not a valid feedback value
    Malformed(String),
    /// Answer or guess is not a valid word
    InvalidWord(WordError),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { answer, guess } => write!(
                f,
                "Answer and guess must both be {WORD_LEN} letters, got {answer} and {guess}"
            ),
            Self::Malformed(text) => write!(
                f,
                "Invalid feedback '{text}': expected {WORD_LEN} digits of 0, 1 or 2"
            ),
            Self::InvalidWord(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl From<WordError> for FeedbackError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl Feedback {
    /// All positions exact
    pub const SOLVED: Self = Self(22222);

    /// Every valid feedback value, in ascending code order
    pub const ALL: [Self; FEEDBACK_COUNT] = enumerate_all();

    /// Build feedback from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks.iter().fold(0, |code, mark| code * 10 + mark.digit()))
    }

    /// Validate a raw decimal code such as `20110`
    ///
    /// # Errors
    /// Returns `FeedbackError::Malformed` if the code has more than five
    /// digits or any digit above 2.
    pub fn from_code(code: u32) -> Result<Self, FeedbackError> {
        let mut rest = code;
        for _ in 0..WORD_LEN {
            if rest % 10 > 2 {
                return Err(FeedbackError::Malformed(code.to_string()));
            }
            rest /= 10;
        }
        if rest != 0 {
            return Err(FeedbackError::Malformed(code.to_string()));
        }
        Ok(Self(code))
    }

    /// Canonical decimal code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Whether every position is exact
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Per-position marks, position 0 first
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut rest = self.0;
        for mark in marks.iter_mut().rev() {
            *mark = Mark::from_digit(rest % 10).unwrap_or(Mark::Absent);
            rest /= 10;
        }
        marks
    }

    /// Calculate the feedback shown when `guess` is played against `answer`
    ///
    /// Each answer letter can justify at most one non-absent mark, so a guess
    /// with more copies of a letter than the answer gets the surplus copies
    /// marked absent.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove those letters from the pool
    /// 2. Second pass: mark present letters while the pool still holds a copy
    /// 3. Encode as a decimal code
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Feedback, Word};
    ///
    /// let answer = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// assert_eq!(Feedback::encode(&answer, &guess).code(), 202);
    /// assert_eq!(Feedback::encode(&answer, &guess).to_string(), "00202");
    /// ```
    #[must_use]
    pub fn encode(answer: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut answer_available = answer.letter_pool();

        // First pass: exact matches consume their letter
        for (mark, (&g, &a)) in marks
            .iter_mut()
            .zip(guess.letters().iter().zip(answer.letters()))
        {
            if g == a {
                *mark = Mark::Exact;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining copies become present marks
        for (mark, &g) in marks.iter_mut().zip(guess.letters()) {
            if *mark != Mark::Absent {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&g) {
                if *count > 0 {
                    *mark = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self::from_marks(marks)
    }

    /// Calculate feedback from raw text
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if either input is not five
    /// characters long, or `FeedbackError::InvalidWord` if either is not a
    /// valid word.
    pub fn score(answer: &str, guess: &str) -> Result<Self, FeedbackError> {
        let (answer_len, guess_len) = (answer.chars().count(), guess.chars().count());
        if answer_len != WORD_LEN || guess_len != WORD_LEN {
            return Err(FeedbackError::LengthMismatch {
                answer: answer_len,
                guess: guess_len,
            });
        }
        Ok(Self::encode(&Word::new(answer)?, &Word::new(guess)?))
    }
}

const fn enumerate_all() -> [Feedback; FEEDBACK_COUNT] {
    let mut all = [Feedback(0); FEEDBACK_COUNT];
    let mut index = 0;
    while index < FEEDBACK_COUNT {
        // Base-3 digits of the index become the decimal digits of the code
        let mut rest = index as u32;
        let mut place = 1;
        let mut code = 0;
        let mut position = 0;
        while position < WORD_LEN {
            code += (rest % 3) * place;
            rest /= 3;
            place *= 10;
            position += 1;
        }
        all[index] = Feedback(code);
        index += 1;
    }
    all
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = WORD_LEN)
    }
}

/// Parses the canonical digit form (`"02110"`) or the letter form
/// (`"-GYY-"`, with `G` exact, `Y` present and `-`/`_`/`X` absent).
impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FeedbackError::Malformed(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return Err(malformed());
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                '2' | 'G' | 'g' => Mark::Exact,
                '1' | 'Y' | 'y' => Mark::Present,
                '0' | '-' | '_' | 'X' | 'x' => Mark::Absent,
                _ => return Err(malformed()),
            };
        }
        Ok(Self::from_marks(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(answer: &str, guess: &str) -> Feedback {
        Feedback::encode(&Word::new(answer).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn solved_constant() {
        assert_eq!(Feedback::SOLVED.code(), 22222);
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.marks(), [Mark::Exact; WORD_LEN]);
    }

    #[test]
    fn all_has_every_code_once() {
        assert_eq!(Feedback::ALL.len(), 243);
        assert_eq!(Feedback::ALL[0].code(), 0);
        assert_eq!(Feedback::ALL[1].code(), 1);
        assert_eq!(Feedback::ALL[3].code(), 10);
        assert_eq!(Feedback::ALL[242], Feedback::SOLVED);
        assert!(Feedback::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(
            Feedback::ALL
                .iter()
                .all(|f| Feedback::from_code(f.code()) == Ok(*f))
        );
    }

    #[test]
    fn all_absent() {
        let feedback = encode("fghij", "abcde");
        assert_eq!(feedback.code(), 0);
        assert_eq!(feedback.to_string(), "00000");
    }

    #[test]
    fn word_against_itself_is_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "speed"] {
            assert_eq!(encode(word, word), Feedback::SOLVED);
        }
    }

    #[test]
    fn rotated_letters_are_all_present() {
        assert_eq!(encode("abcxy", "xyabc").to_string(), "11111");
    }

    #[test]
    fn surplus_guess_letters_are_absent() {
        // answer has two a's and three b's
        assert_eq!(encode("aabbb", "aaabb").to_string(), "22022");
        // answer has one a and two b's
        assert_eq!(encode("abxby", "aaabb").to_string(), "20021");
    }

    #[test]
    fn exact_match_takes_priority_over_present() {
        // second O is exact, first O only gets the remaining copy
        assert_eq!(encode("floor", "robot").to_string(), "11020");
        // geese has three e's, creep only two
        assert_eq!(encode("creep", "geese").to_string(), "01200");
    }

    #[test]
    fn encoding_is_not_symmetric() {
        assert_eq!(encode("erase", "speed").to_string(), "10110");
        assert_eq!(encode("speed", "erase").to_string(), "10011");
        assert_ne!(encode("erase", "speed"), encode("speed", "erase"));
    }

    #[test]
    fn score_rejects_length_mismatch() {
        assert_eq!(
            Feedback::score("crane", "cranes"),
            Err(FeedbackError::LengthMismatch {
                answer: 5,
                guess: 6
            })
        );
        assert!(matches!(
            Feedback::score("cr4ne", "crane"),
            Err(FeedbackError::InvalidWord(_))
        ));
        assert_eq!(Feedback::score("slate", "crane").unwrap().code(), 202);
    }

    #[test]
    fn from_code_rejects_invalid_digits() {
        assert!(Feedback::from_code(22222).is_ok());
        assert!(Feedback::from_code(202).is_ok());
        assert!(Feedback::from_code(30000).is_err());
        assert!(Feedback::from_code(12).is_ok());
        assert!(Feedback::from_code(13).is_err());
        assert!(Feedback::from_code(100_000).is_err());
    }

    #[test]
    fn parse_digit_form() {
        let feedback: Feedback = "00202".parse().unwrap();
        assert_eq!(feedback.code(), 202);
        assert_eq!(feedback.to_string(), "00202");
        assert_eq!(
            feedback.marks(),
            [Mark::Absent, Mark::Absent, Mark::Exact, Mark::Absent, Mark::Exact]
        );
    }

    #[test]
    fn parse_letter_form() {
        let digits: Feedback = "21010".parse().unwrap();
        let letters: Feedback = "GY-Y-".parse().unwrap();
        let lower: Feedback = "gyxy_".parse().unwrap();
        assert_eq!(digits, letters);
        assert_eq!(digits, lower);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("2222".parse::<Feedback>().is_err());
        assert!("222222".parse::<Feedback>().is_err());
        assert!("22a22".parse::<Feedback>().is_err());
        assert!("22322".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn exact_positions_match_equal_letters() {
        let words = ["crane", "slate", "speed", "erase", "geese", "aabbb"];
        for answer in words {
            for guess in words {
                let marks = encode(answer, guess).marks();
                for (i, mark) in marks.iter().enumerate() {
                    let same = answer.as_bytes()[i] == guess.as_bytes()[i];
                    assert_eq!(*mark == Mark::Exact, same, "{answer} vs {guess} at {i}");
                }
            }
        }
    }

    #[test]
    fn marked_copies_never_exceed_answer_copies() {
        let words = ["aaabb", "aabbb", "abxby", "speed", "geese", "creep", "eerie"];
        for answer in words {
            let answer_word = Word::new(answer).unwrap();
            for guess in words {
                let marks = encode(answer, guess).marks();
                for letter in guess.bytes() {
                    let marked = guess
                        .bytes()
                        .zip(marks)
                        .filter(|&(ch, mark)| ch == letter && mark != Mark::Absent)
                        .count();
                    assert!(marked <= answer_word.count_of(letter));
                }
            }
        }
    }
}
