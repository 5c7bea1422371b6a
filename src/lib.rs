//! # calcboard
//!
//! calcboard is a small calculator board: an expression evaluator, a linear
//! equation solver and a quadratic equation solver that share one number
//! formatter, plus the visibility rules for switching the three sections on
//! and off.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{ExpressionEvaluator, MathEvaluator, value::core::Value},
};

/// Defines the structure of parsed expressions.
///
/// Declares the `Expr` and `Statement` types the parser builds and the
/// evaluator walks. Every node carries its source line for error reporting.
pub mod ast;
/// Loading of the optional TOML configuration file.
pub mod config;
/// Provides unified error types.
///
/// Covers every failure in the crate: lexing, parsing and evaluating
/// expressions, reading coefficient fields, degenerate equations and
/// configuration loading. All messages carry enough context to be shown to
/// the user directly.
pub mod error;
/// Display formatting shared by every widget.
pub mod format;
/// Coefficient text fields to numbers.
pub mod input;
/// The built-in expression interpreter.
///
/// Ties together lexing, parsing and evaluation behind the
/// `ExpressionEvaluator` trait that the expression widget depends on.
pub mod interpreter;
/// Linear and quadratic equation solvers.
pub mod solver;
/// General utilities for safe numeric conversion.
pub mod util;
/// Section visibility for the board.
///
/// Pure functions from toggle states to the derived board state; nothing here
/// holds global state.
pub mod visibility;
/// The three calculator widgets.
///
/// Each widget reads raw text, validates it, runs the solver or evaluator and
/// produces a `WidgetOutput` ready for display.
pub mod widget;

/// Evaluates an expression text with a fresh [`MathEvaluator`].
///
/// # Examples
/// ```
/// use calcboard::{evaluate, format::render_value};
///
/// let value = evaluate("f(x) = x ^ 2; f(3) + 1").unwrap();
/// assert_eq!(render_value(&value), "10");
///
/// // Unknown symbols are reported, not panicked on.
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, EvalError> {
    MathEvaluator.evaluate(source)
}
