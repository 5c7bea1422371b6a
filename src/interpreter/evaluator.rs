/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: scalar
/// arithmetic with complex promotion, element-wise array arithmetic, matrix
/// products, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, unary plus, logical NOT and factorial.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and the
/// evaluator's result type.
pub mod core;

/// Utility functions for evaluation.
///
/// Variable and constant lookup, literal construction, indexing and the
/// numeric helpers shared by operators and builtins.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
