//! # calcline
//!
//! calcline is a line-oriented calculator written in Rust.
//! Each line holds one binary arithmetic expression such as `5 + 3`, which is
//! split into tokens, parsed, and evaluated to an `f64` or a descriptive error.

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

use crate::interpreter::{evaluator::eval_expression, parser::parse_expression};

/// Defines the structure of a parsed line.
///
/// This module declares the `Expression` type together with the `Operator`
/// and `Side` enums it is built from. Expressions are produced by the parser
/// and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of supported operators and their symbols.
/// - Identifies operands by position for error reporting.
pub mod ast;
/// Provides the error types for evaluation and sessions.
///
/// This module defines every error that can be raised while evaluating a line
/// or while running an input session. Evaluation errors carry the offending
/// token where one exists so that it can be shown to the user.
///
/// # Responsibilities
/// - Defines the closed evaluation error taxonomy.
/// - Separates recoverable per-line errors from fatal session I/O errors.
pub mod error;
/// Orchestrates the evaluation of a single line.
///
/// This module ties together lexing, parsing and evaluation. Each stage is
/// public so callers can stop after parsing to inspect the expression.
///
/// # Responsibilities
/// - Splits input into tokens.
/// - Validates and converts tokens into an expression.
/// - Computes the value of the expression.
pub mod interpreter;
/// Runs an interactive or scripted input loop.
///
/// A session reads lines from any `BufRead`, stops at a sentinel word or at
/// the end of input, evaluates every other line and writes the rendered result
/// to any `Write`.
pub mod session;

pub use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Evaluates one line of input.
///
/// The line must have the shape `<number> <operator> <number>`, with the parts
/// separated by any amount of whitespace. Supported operators are `+`, `-`,
/// `*` and `/`. The evaluator is a pure function of its input: it keeps no
/// state between calls and never panics on user input.
///
/// # Errors
/// Returns an error if the line has the wrong number of tokens, an operand is
/// not a number, the operator is unknown, or a division by zero is attempted.
///
/// # Examples
/// ```
/// use calcline::{EvalError, evaluate};
///
/// // Whitespace runs collapse, so irregular spacing is fine.
/// assert_eq!(evaluate("  5   +   3  ").unwrap(), 8.0);
/// assert_eq!(evaluate("10 / 2").unwrap(), 5.0);
///
/// // Errors are values, not panics.
/// assert_eq!(evaluate("10 / 0"), Err(EvalError::DivisionByZero));
/// assert!(matches!(evaluate("5 ^ 2"),
///                  Err(EvalError::UnknownOperator { symbol }) if symbol == "^"));
/// ```
pub fn evaluate(line: &str) -> EvalResult<f64> {
    let expression = parse_expression(line)?;
    eval_expression(&expression)
}
