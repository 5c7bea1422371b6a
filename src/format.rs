/// Numeric formatting.
///
/// Turns a single `f64` into display text, handling non-finite values and
/// switching to scientific notation for very large or very small magnitudes.
pub mod number;
/// Structured value rendering.
///
/// Renders any evaluator result: scalars via the numeric formatter, arrays
/// and maps as JSON text.
pub mod value;

pub use number::format_number;
pub use value::render_value;
