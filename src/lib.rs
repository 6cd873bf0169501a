//! # infixcalc
//!
//! infixcalc is an interactive arithmetic expression evaluator written in
//! Rust. It reads statements terminated by `;`, evaluates infix expressions
//! over `f64` with variables and named constants, and prints each result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::session::{Outcome, Session},
};

/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines every error a statement can fail with. Each carries
/// the line on which it was detected, and all of them convert into
/// [`error::CalcError`] so they propagate with `?` through every level of the
/// evaluator.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Tells recoverable statement errors apart from stream failures.
/// - Maps errors to process exit codes.
pub mod error;
/// Orchestrates the evaluation of statements.
///
/// This module ties together the lexer, the symbol table, the evaluator and
/// the session loop.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates every statement in `source` and returns their values in order.
///
/// A fresh context is used, so only the seeded constants are defined at the
/// start. Evaluation stops at the quit token or the end of the string; a final
/// statement without `;` still counts.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
///
/// # Examples
/// ```
/// use infixcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4; (2 + 3) * 4;").unwrap(), vec![14.0, 20.0]);
/// assert_eq!(evaluate("x = 5; x = 10; x").unwrap(), vec![5.0, 10.0, 10.0]);
///
/// // 'y' was never assigned.
/// assert!(evaluate("y;").is_err());
/// ```
pub fn evaluate(source: &str) -> CalcResult<Vec<f64>> {
    let mut session = Session::new(source.as_bytes());
    let mut values = Vec::new();

    loop {
        match session.next_outcome()? {
            Outcome::Value(value) => values.push(value),
            Outcome::Quit | Outcome::EndOfInput => return Ok(values),
        }
    }
}
