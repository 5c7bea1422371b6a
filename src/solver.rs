/// The linear solver for `a·x + b = c`.
pub mod linear;
/// The quadratic solver for `a·x² + b·x + c = 0`.
///
/// Classifies the discriminant and returns two real roots, one repeated
/// root or a conjugate complex pair.
pub mod quadratic;
/// Solver inputs and outcomes, and how outcomes read on screen.
pub mod solution;

pub use linear::solve_linear;
pub use quadratic::solve_quadratic;
pub use solution::{Coefficients, Solution};
