//! Constraint arguments
//!
//! Commands take constraints as a flat list of alternating guess and
//! feedback tokens: `crane 00202 slate 02222`.

use crate::core::{Feedback, Word};
use crate::solver::Constraint;
use anyhow::{Context, Result, bail};

/// Parse alternating `<guess> <feedback>` tokens
///
/// # Errors
/// Returns an error if the token count is odd, a guess is not a valid word,
/// or a feedback token is not a valid feedback code.
pub fn parse_constraints<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Constraint>> {
    if tokens.len() % 2 != 0 {
        bail!(
            "constraints come in <guess> <feedback> pairs, got {} tokens",
            tokens.len()
        );
    }

    tokens
        .chunks_exact(2)
        .map(|pair| {
            let (guess, feedback) = (pair[0].as_ref(), pair[1].as_ref());
            let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
            let feedback: Feedback = feedback
                .parse()
                .with_context(|| format!("invalid feedback for guess '{guess}'"))?;
            Ok(Constraint::new(guess, feedback))
        })
        .collect()
}
