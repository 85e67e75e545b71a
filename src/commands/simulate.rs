//! Simulation command
//!
//! Plays the solver against every possible answer and collects a histogram
//! of how many rounds each game took.

use crate::core::Word;
use crate::solver::{Constraint, Solver, SolverError};

/// Default round limit per game
pub const MAX_ROUNDS: usize = 10;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub max_rounds: usize,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub answer: Word,
    pub history: Vec<Constraint>,
    pub solved: bool,
}

impl GameRecord {
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
}

/// Outcome of simulating every answer
#[derive(Debug)]
pub struct SimulationReport {
    pub games: Vec<GameRecord>,
    /// `histogram[n]` counts games that took `n` rounds
    pub histogram: Vec<usize>,
}

impl SimulationReport {
    /// Sum of rounds over all games
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.games.iter().map(GameRecord::rounds).sum()
    }

    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.total_rounds() as f64 / self.games.len() as f64
    }

    /// Games that hit the round limit without finding the answer
    #[must_use]
    pub fn unsolved(&self) -> usize {
        self.games.iter().filter(|g| !g.solved).count()
    }
}

/// Play a single game against `answer`
///
/// `prefix` holds constraints known before the game starts; they narrow the
/// candidates but do not count as rounds.
///
/// # Errors
/// Returns `SolverError` if the solver cannot produce a guess.
pub fn play_game(
    solver: &Solver<'_>,
    answer: &Word,
    prefix: &[Constraint],
    config: &SimulationConfig,
) -> Result<GameRecord, SolverError> {
    let mut history: Vec<Constraint> = Vec::new();
    let mut solved = false;

    for _ in 0..config.max_rounds {
        // Every game opens with the same word, prefix or not
        let guess = if history.is_empty() {
            solver.opening().clone()
        } else {
            let context: Vec<Constraint> = prefix.iter().chain(&history).cloned().collect();
            solver.next_guess(&context)?
        };

        let constraint = Constraint::observe(answer, guess);
        solved = constraint.feedback.is_solved();
        history.push(constraint);
        if solved {
            break;
        }
    }

    Ok(GameRecord {
        answer: answer.clone(),
        history,
        solved,
    })
}

/// Play every answer consistent with `prefix`
///
/// `progress` receives `(completed, total)` games.
///
/// # Errors
/// Returns `SolverError` if the solver cannot produce a guess.
pub fn run_simulation<F>(
    solver: &Solver<'_>,
    prefix: &[Constraint],
    config: &SimulationConfig,
    mut progress: F,
) -> Result<SimulationReport, SolverError>
where
    F: FnMut(usize, usize),
{
    let answers = solver.candidates(prefix);
    let total = answers.len();
    let mut games = Vec::with_capacity(total);
    let mut histogram = vec![0; config.max_rounds + 1];

    for answer in &answers {
        let game = play_game(solver, answer, prefix, config)?;
        log::debug!("{answer}: {} rounds", game.rounds());
        histogram[game.rounds()] += 1;
        games.push(game);
        progress(games.len(), total);
    }

    let report = SimulationReport { games, histogram };
    log::info!(
        "simulated {total} games, average {:.3} rounds, {} unsolved",
        report.average_rounds(),
        report.unsolved()
    );
    Ok(report)
}
