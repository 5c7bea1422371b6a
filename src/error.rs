/// Configuration errors.
///
/// Raised when the optional TOML configuration file cannot be read or does
/// not match the expected layout.
pub mod config_error;
/// Evaluator errors.
///
/// The combined error returned by an expression evaluator, wrapping either a
/// parse error or a runtime error.
pub mod eval_error;
/// Coefficient input errors.
///
/// Raised when a coefficient text field does not hold a finite number.
pub mod input_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include syntax mistakes, unexpected tokens and
/// unbalanced delimiters, all detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown symbols, type mismatches, invalid arguments and
/// failed numeric conversions.
pub mod runtime_error;
/// Solver errors.
///
/// Degenerate equations that a solver reports instead of a root.
pub mod solve_error;

pub use config_error::ConfigError;
pub use eval_error::EvalError;
pub use input_error::InputError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use solve_error::SolveError;
