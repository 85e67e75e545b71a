//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use indicatif::{ProgressBar, ProgressStyle};

/// Words per line when printing word lists
pub const WORDS_PER_LINE: usize = 20;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Exact => '🟩',
        })
        .collect()
}

/// Lay out words in space-separated lines of `per_line` words
#[must_use]
pub fn column_wrap(words: &[Word], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|line| {
            line.iter()
                .map(Word::text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar for `total` steps, hidden when `quiet`
#[must_use]
pub fn progress_bar(total: usize, label: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb
}

/// Histogram bar of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn feedback_to_emoji_all_absent() {
        let feedback = Feedback::from_code(0).unwrap();
        assert_eq!(feedback_to_emoji(feedback), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_to_emoji_mixed() {
        let feedback: Feedback = "21000".parse().unwrap();
        assert_eq!(feedback_to_emoji(feedback), "🟩🟨⬜⬜⬜");
        assert_eq!(feedback_to_emoji(Feedback::SOLVED), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn column_wrap_breaks_lines() {
        let words = words_from_slice(&["crane", "slate", "irate", "crate", "grate"]);

        assert_eq!(
            column_wrap(&words, 2),
            vec!["crane slate", "irate crate", "grate"]
        );
        assert_eq!(column_wrap(&words, WORDS_PER_LINE).len(), 1);
        assert!(column_wrap(&[], WORDS_PER_LINE).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
