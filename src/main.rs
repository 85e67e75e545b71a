//! Wordle Minimax - CLI
//!
//! Scores guesses, narrows candidates and ranks guesses by their worst case.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordle_minimax::{
    commands::{
        SimulationConfig, calc, parse_constraints, run_lookahead, run_simulation, score_words,
        solve,
    },
    core::Word,
    output::{
        formatters::progress_bar, print_calc_result, print_lookahead, print_score_result,
        print_simulation_report, print_solve_result,
    },
    solver::{Constraint, GuessPool, Solver},
    wordlists::{WordLists, loader::LinePolicy},
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver that minimizes the worst-case remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary of guessable words, one per line
    #[arg(short, long, global = true)]
    dic: Option<PathBuf>,

    /// Possible answers, one per line (default: the dictionary)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Keep the first five characters of longer word-list lines instead of skipping them
    #[arg(long, global = true)]
    truncate: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the feedback for a guess against an answer
    Score {
        answer: String,
        guess: String,
    },

    /// Print the answers consistent with the constraints
    Solve {
        /// Alternating <guess> <feedback> tokens, e.g. crane 00202
        constraints: Vec<String>,
    },

    /// Rank every dictionary word by its worst case
    Calc {
        /// Alternating <guess> <feedback> tokens, e.g. crane 00202
        constraints: Vec<String>,
    },

    /// Play every remaining answer and report rounds to solve
    Sim {
        /// First guess of every game
        #[arg(short, long, default_value = "raise")]
        opening: Word,

        /// Round limit per game
        #[arg(short, long, default_value_t = wordle_minimax::commands::MAX_ROUNDS)]
        rounds: usize,

        /// Words the solver may guess after the opening
        #[arg(short, long, value_enum, default_value_t = PoolArg::Candidates)]
        pool: PoolArg,

        /// Print every game
        #[arg(short, long)]
        verbose: bool,

        /// Alternating <guess> <feedback> tokens, e.g. crane 00202
        constraints: Vec<String>,
    },

    /// Find the best second guess for every feedback of a first guess
    Lookahead {
        /// The first guess to evaluate
        #[arg(short, long)]
        first: Word,

        /// Alternating <guess> <feedback> tokens, e.g. crane 00202
        constraints: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PoolArg {
    Candidates,
    Dictionary,
}

impl From<PoolArg> for GuessPool {
    fn from(arg: PoolArg) -> Self {
        match arg {
            PoolArg::Candidates => Self::Candidates,
            PoolArg::Dictionary => Self::Dictionary,
        }
    }
}

/// Load word lists from the global flags
fn load_wordlists(cli: &Cli) -> Result<WordLists> {
    let dic = cli
        .dic
        .as_deref()
        .context("this command needs a dictionary: pass --dic <path>")?;
    let policy = if cli.truncate {
        LinePolicy::Truncate
    } else {
        LinePolicy::Strict
    };

    WordLists::load(dic, cli.answers.as_deref(), policy)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Score { answer, guess } => {
            let result = score_words(answer, guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Solve { constraints } => {
            let constraints = parse_constraints(constraints)?;
            let lists = load_wordlists(&cli)?;
            print_solve_result(&solve(&lists, &constraints));
            Ok(())
        }
        Commands::Calc { constraints } => {
            let constraints = parse_constraints(constraints)?;
            let lists = load_wordlists(&cli)?;
            run_calc_command(&lists, &constraints, cli.quiet)
        }
        Commands::Sim {
            opening,
            rounds,
            pool,
            verbose,
            constraints,
        } => {
            let constraints = parse_constraints(constraints)?;
            let lists = load_wordlists(&cli)?;
            let solver = Solver::new(&lists.dictionary, &lists.answers, opening.clone())
                .with_guess_pool((*pool).into());
            let config = SimulationConfig {
                max_rounds: *rounds,
            };
            run_sim_command(&solver, &constraints, &config, *verbose, cli.quiet)
        }
        Commands::Lookahead { first, constraints } => {
            let constraints = parse_constraints(constraints)?;
            let lists = load_wordlists(&cli)?;
            run_lookahead_command(&lists, first, &constraints, cli.quiet)
        }
    }
}

fn run_calc_command(
    lists: &WordLists,
    constraints: &[Constraint],
    quiet: bool,
) -> Result<()> {
    let pb = progress_bar(lists.dictionary.len(), "ranking guesses", quiet);
    let result = calc(lists, constraints, |done, _| pb.set_position(done as u64))?;
    pb.finish_and_clear();

    print_calc_result(&result);
    Ok(())
}

fn run_sim_command(
    solver: &Solver<'_>,
    constraints: &[Constraint],
    config: &SimulationConfig,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let pb = progress_bar(0, "simulating games", quiet);
    let report = run_simulation(solver, constraints, config, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    })?;
    pb.finish_and_clear();

    print_simulation_report(&report, verbose);
    Ok(())
}

fn run_lookahead_command(
    lists: &WordLists,
    first: &Word,
    constraints: &[Constraint],
    quiet: bool,
) -> Result<()> {
    let pb = progress_bar(0, "evaluating buckets", quiet);
    let result = run_lookahead(lists, first, constraints, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    })?;
    pb.finish_and_clear();

    print_lookahead(&result);
    Ok(())
}
