/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts. Includes implementations for basic arithmetic operations, absolute
/// value, elementary functions and the widget rendering of complex results.
pub mod complex;

/// The `Value` enum and its conversions.
pub mod core;
