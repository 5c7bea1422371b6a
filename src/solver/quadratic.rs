use crate::{error::SolveError, solver::solution::Solution};

/// Solves `a·x² + b·x + c = 0`.
///
/// The discriminant `D = b² - 4ac` is compared with zero exactly:
/// - `D > 0`: two real roots, `(-b + √D) / 2a` first.
/// - `D == 0`: one repeated root, `-b / 2a`.
/// - `D < 0`: the conjugate pair `-b / 2a ± (√-D / 2a)i`.
///
/// # Errors
/// [`SolveError::NotQuadratic`] when `a == 0`.
///
/// # Example
/// ```
/// use calcboard::{error::SolveError,
///                 solver::{Solution, solve_quadratic}};
///
/// assert_eq!(solve_quadratic(1.0, -5.0, 6.0), Ok(Solution::TwoRealRoots(3.0, 2.0)));
/// assert_eq!(solve_quadratic(1.0, 2.0, 1.0), Ok(Solution::OneRealRoot(-1.0)));
/// assert_eq!(solve_quadratic(1.0, 2.0, 5.0),
///            Ok(Solution::ComplexRootPair { real: -1.0, imag: 2.0 }));
/// assert_eq!(solve_quadratic(0.0, 2.0, 1.0), Err(SolveError::NotQuadratic));
/// ```
#[allow(clippy::suboptimal_flops)]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Solution, SolveError> {
    if a == 0.0 {
        return Err(SolveError::NotQuadratic);
    }

    // Unfused, so the zero test sees the same rounding as `b*b - 4ac`.
    let discriminant = b * b - 4.0 * a * c;
    let two_a = 2.0 * a;

    if discriminant > 0.0 {
        let root = discriminant.sqrt();
        Ok(Solution::TwoRealRoots((-b + root) / two_a, (-b - root) / two_a))
    } else if discriminant == 0.0 {
        Ok(Solution::OneRealRoot(-b / two_a))
    } else {
        Ok(Solution::ComplexRootPair { real: -b / two_a,
                                       imag: (-discriminant).sqrt() / two_a, })
    }
}
