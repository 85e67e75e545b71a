//! Display functions for command results

use super::formatters::{WORDS_PER_LINE, column_wrap, create_progress_bar, feedback_to_emoji};
use crate::commands::{CalcResult, ScoreResult, SimulationReport, SolveResult};
use crate::core::Word;
use crate::solver::Lookahead;
use colored::Colorize;

/// Print the feedback for one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("answer: {}", result.answer);
    println!("input : {}", result.guess);
    println!(
        "score : {} {}",
        result.feedback.to_string().bright_yellow().bold(),
        feedback_to_emoji(result.feedback)
    );
}

/// Print the remaining candidates
pub fn print_solve_result(result: &SolveResult) {
    print_words(&result.candidates);
    println!("Count: {}", result.candidates.len());
}

/// Print the full ranking, worst guess first
pub fn print_calc_result(result: &CalcResult) {
    for entry in &result.ranking {
        if entry.is_candidate {
            println!("{} {}{}", entry.word, entry.worst_case, "*".green().bold());
        } else {
            println!("{} {}", entry.word, entry.worst_case);
        }
    }

    println!("Count: {}", result.candidates.len());
    if result.candidates.len() <= WORDS_PER_LINE {
        print_words(&result.candidates);
    }
    println!("Best: {}", result.best.text().bright_yellow().bold());
}

/// Print every game followed by the rounds histogram
pub fn print_simulation_report(report: &SimulationReport, verbose: bool) {
    if verbose {
        for (i, game) in report.games.iter().enumerate() {
            let steps: Vec<String> = game.history.iter().map(ToString::to_string).collect();
            let marker = if game.solved {
                String::new()
            } else {
                format!(" {}", "unsolved".red())
            };
            println!("{i} {} [{}]{marker}", game.answer, steps.join(" "));
        }
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "ROUNDS TO SOLVE".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    let games = report.games.len();
    let peak = report.histogram.iter().copied().max().unwrap_or(0);
    for (rounds, &count) in report.histogram.iter().enumerate() {
        let bar = create_progress_bar(count as f64, peak as f64, 40);
        println!("{rounds:3} {count:6} {}", bar.green());
    }

    println!(
        "\n{} {} {}",
        report.total_rounds(),
        games,
        format!("{:.4}", report.average_rounds()).bright_yellow().bold()
    );
    if report.unsolved() > 0 {
        println!(
            "{}",
            format!("{} games hit the round limit", report.unsolved()).red()
        );
    }
}

/// Print the best reply for every feedback bucket
pub fn print_lookahead(result: &Lookahead) {
    println!(
        "First guess: {}",
        result.first_guess.text().bright_yellow().bold()
    );

    for bucket in &result.buckets {
        println!(
            "{} {} {:6} {} {}",
            bucket.feedback,
            feedback_to_emoji(bucket.feedback),
            bucket.bucket_size,
            bucket.reply,
            bucket.worst_case
        );
    }

    println!(
        "Buckets: {}  Candidates: {}  Worst case: {}",
        result.buckets.len(),
        result.total_candidates(),
        result.worst_case().to_string().bright_yellow().bold()
    );
}

fn print_words(words: &[Word]) {
    for line in column_wrap(words, WORDS_PER_LINE) {
        println!("{line}");
    }
}
