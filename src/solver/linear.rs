use crate::solver::solution::Solution;

/// Solves `a·x + b = c`.
///
/// With `a == 0` the equation is either an identity (`b == c`) or a
/// contradiction. Otherwise the single solution is `(c - b) / a`, computed
/// with plain IEEE-754 arithmetic.
///
/// # Example
/// ```
/// use calcboard::solver::{Solution, solve_linear};
///
/// assert_eq!(solve_linear(2.0, 3.0, 7.0), Solution::SingleValue(2.0));
/// assert_eq!(solve_linear(0.0, 5.0, 5.0), Solution::InfiniteSolutions);
/// assert_eq!(solve_linear(0.0, 1.0, 2.0), Solution::NoSolution);
/// ```
#[must_use]
pub fn solve_linear(a: f64, b: f64, c: f64) -> Solution {
    if a == 0.0 {
        return if b == c {
            Solution::InfiniteSolutions
        } else {
            Solution::NoSolution
        };
    }
    Solution::SingleValue((c - b) / a)
}
