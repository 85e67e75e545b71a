//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_calc_result, print_lookahead, print_score_result, print_simulation_report,
    print_solve_result,
};
