/// Elementary functions: trigonometric, hyperbolic and exponential.
///
/// Functions with a complex extension accept complex input; the inverse
/// trigonometric functions are real-only.
pub mod elementary;
/// Logarithm function implementations.
///
/// Supports natural logarithms with an optional base, plus `log10` and
/// `log2`. Negative input moves into the complex plane.
pub mod log;
/// Square, cube and n-th roots.
pub mod sqrt;
/// `floor`, `ceil`, `round` and `sign`.
pub mod rounding;
/// Aggregates over argument lists or arrays: `min`, `max`, `sum`, `mean`,
/// `prod` and `size`.
pub mod aggregate;
/// Complex number parts: `re`, `im`, `conj` and `arg`.
pub mod parts;
/// `gamma`, `factorial`, `hypot` and the function forms of operators.
pub mod special;

pub mod core;
