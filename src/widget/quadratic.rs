use tracing::{debug, warn};

use crate::{
    input::parse_coefficients,
    solver::solve_quadratic,
    widget::{INVALID_COEFFICIENTS, output::WidgetOutput},
};

/// Solves `a·x² + b·x + c = 0` from the three text fields.
///
/// A zero leading coefficient is reported as an error pointing at the linear
/// solver.
///
/// # Example
/// ```
/// use calcboard::widget::run_quadratic;
///
/// assert_eq!(run_quadratic("1", "-3", "2").text, "Two real roots: x1 = 2, x2 = 1");
///
/// let degenerate = run_quadratic("0", "1", "1");
/// assert!(degenerate.is_error);
/// assert_eq!(degenerate.text,
///            "This is not quadratic (a must be nonzero). Use the linear solver.");
/// ```
pub fn run_quadratic(a: &str, b: &str, c: &str) -> WidgetOutput {
    let coefficients = match parse_coefficients(a, b, c) {
        Ok(coefficients) => coefficients,
        Err(err) => {
            warn!(%err, "rejected quadratic coefficients");
            return WidgetOutput::error(INVALID_COEFFICIENTS);
        },
    };

    match solve_quadratic(coefficients.a, coefficients.b, coefficients.c) {
        Ok(solution) => {
            debug!(?coefficients, ?solution, "solved quadratic equation");
            WidgetOutput::ok(solution.to_string())
        },
        Err(err) => {
            debug!(?coefficients, %err, "degenerate quadratic");
            WidgetOutput::error(err.to_string())
        },
    }
}
