/// Parser entry points and the shared result type.
///
/// Expression parsing starts at the lowest-precedence level and descends
/// through the binary and unary layers.
pub mod core;

/// Statement parsing.
///
/// Splits a program into assignments, function definitions and expression
/// statements.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence level, from logical `or` down to `* / %`.
pub mod binary;

/// Unary, power, postfix and primary parsing.
pub mod unary;

/// Parsing helpers.
///
/// Comma-separated lists, identifiers and object literals.
pub mod utils;
