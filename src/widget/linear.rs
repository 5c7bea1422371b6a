use tracing::{debug, warn};

use crate::{
    input::parse_coefficients,
    solver::solve_linear,
    widget::{INVALID_COEFFICIENTS, output::WidgetOutput},
};

/// Solves `a·x + b = c` from the three text fields.
///
/// # Example
/// ```
/// use calcboard::widget::run_linear;
///
/// assert_eq!(run_linear("2", "3", "7").text, "x = 2");
/// assert_eq!(run_linear("0", "5", "5").text, "Infinite solutions (any x).");
/// assert!(run_linear("two", "3", "7").is_error);
/// ```
pub fn run_linear(a: &str, b: &str, c: &str) -> WidgetOutput {
    let coefficients = match parse_coefficients(a, b, c) {
        Ok(coefficients) => coefficients,
        Err(err) => {
            warn!(%err, "rejected linear coefficients");
            return WidgetOutput::error(INVALID_COEFFICIENTS);
        },
    };

    let solution = solve_linear(coefficients.a, coefficients.b, coefficients.c);
    debug!(?coefficients, ?solution, "solved linear equation");
    WidgetOutput::ok(solution.to_string())
}
