//! Command implementations
//!
//! Each command returns a result struct; printing lives in `output`.

mod args;
pub mod calc;
pub mod lookahead;
pub mod score;
pub mod simulate;
pub mod solve;

pub use args::parse_constraints;
pub use calc::{CalcResult, calc};
pub use lookahead::run_lookahead;
pub use score::{ScoreResult, score_words};
pub use simulate::{GameRecord, MAX_ROUNDS, SimulationConfig, SimulationReport, run_simulation};
pub use solve::{SolveResult, solve};
