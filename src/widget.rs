/// The expression widget.
///
/// Hands trimmed text to an injected [`ExpressionEvaluator`] and renders the
/// result or the failure.
///
/// [`ExpressionEvaluator`]: crate::interpreter::ExpressionEvaluator
pub mod expression;
/// The linear equation widget.
pub mod linear;
/// The widget result type.
pub mod output;
/// The quadratic equation widget.
pub mod quadratic;

pub use expression::run_expression;
pub use linear::run_linear;
pub use output::WidgetOutput;
pub use quadratic::run_quadratic;

/// Advisory shown when any coefficient field fails to parse.
pub const INVALID_COEFFICIENTS: &str = "Please enter valid numbers for a, b, and c.";
