use tracing::{debug, warn};

use crate::{format::render_value, interpreter::ExpressionEvaluator, widget::output::WidgetOutput};

/// Advisory shown for an empty expression field.
pub const EMPTY_EXPRESSION: &str = "Please enter an expression.";

/// Evaluates the expression field.
///
/// Blank input yields the non-error advisory [`EMPTY_EXPRESSION`]. Otherwise
/// the trimmed text is passed to `evaluator`; a value is rendered with
/// [`render_value`] and a failure becomes `Error: {message}`.
///
/// # Example
/// ```
/// use calcboard::{interpreter::MathEvaluator, widget::run_expression};
///
/// let mut evaluator = MathEvaluator;
/// assert_eq!(run_expression(&mut evaluator, "2 + 3 * 4").text, "14");
///
/// let failed = run_expression(&mut evaluator, "1 +");
/// assert!(failed.is_error);
/// assert!(failed.text.starts_with("Error: "));
/// ```
pub fn run_expression(evaluator: &mut dyn ExpressionEvaluator, input: &str) -> WidgetOutput {
    let expression = input.trim();
    if expression.is_empty() {
        debug!("empty expression");
        return WidgetOutput::ok(EMPTY_EXPRESSION);
    }

    debug!(expression, "evaluating expression");
    match evaluator.evaluate(expression) {
        Ok(value) => {
            let text = render_value(&value);
            debug!(result = %text, "expression evaluated");
            WidgetOutput::ok(text)
        },
        Err(err) => {
            warn!(%err, expression, "expression failed");
            WidgetOutput::error(format!("Error: {err}"))
        },
    }
}
