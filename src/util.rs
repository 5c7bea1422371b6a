/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `f64` and
/// `usize` without risking silent data loss or rounding errors. Use these
/// helpers for indices, counts and digit arguments.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range or not an integer.
pub mod num;
