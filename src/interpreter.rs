use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::statement::parse_program,
        value::core::Value,
    },
};

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, comparisons and logic over real, complex and
/// structured values, and binds variables and user functions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables, constants, builtins and user-defined functions.
/// - Reports runtime errors such as unknown symbols or shape mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens, each corresponding to a number, identifier, operator, delimiter
/// or keyword, tagged with its line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Skips whitespace and `#` comments.
/// - Reports lexical errors for characters no token matches.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Encodes operator precedence and associativity.
/// - Validates syntax, reporting errors with line info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: reals, booleans, complex numbers, arrays and
///   objects.
/// - Implements complex arithmetic.
/// - Provides checked conversions used by operators and builtins.
pub mod value;

/// Turns expression text into a value.
///
/// The expression widget depends on this capability rather than on a
/// concrete interpreter, so tests and embedders can supply their own.
pub trait ExpressionEvaluator {
    /// Evaluates `expression` and returns its value.
    ///
    /// # Errors
    /// Any parse or runtime failure, as an [`EvalError`].
    fn evaluate(&mut self, expression: &str) -> Result<Value, EvalError>;
}

/// The built-in math interpreter.
///
/// Every call to [`ExpressionEvaluator::evaluate`] runs in a fresh
/// [`Context`], so variables and functions never leak between calls.
///
/// # Example
/// ```
/// use calcboard::interpreter::{ExpressionEvaluator, MathEvaluator, value::core::Value};
///
/// let mut evaluator = MathEvaluator;
/// assert_eq!(evaluator.evaluate("x = 4; sqrt(x) + 1").unwrap(), Value::Real(3.0));
///
/// // `x` from the previous call is gone.
/// assert!(evaluator.evaluate("x").is_err());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MathEvaluator;

impl ExpressionEvaluator for MathEvaluator {
    fn evaluate(&mut self, expression: &str) -> Result<Value, EvalError> {
        let tokens = tokenize(expression).inspect_err(|err| debug!(%err, "lexing failed"))?;
        trace!(tokens = tokens.len(), "tokenized expression");

        let program = parse_program(&tokens).inspect_err(|err| debug!(%err, "parsing failed"))?;
        trace!(statements = program.len(), "parsed program");

        let value = Context::new().eval_program(&program)
                                  .inspect_err(|err| debug!(%err, "evaluation failed"))?;
        Ok(value)
    }
}
