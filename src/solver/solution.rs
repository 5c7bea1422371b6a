use std::fmt::Display;

use crate::format::number::format_number;

/// The three coefficients of an equation, already validated as finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Coefficient of the highest-order term.
    pub a: f64,
    /// The middle coefficient.
    pub b: f64,
    /// The constant term (right-hand side for linear equations).
    pub c: f64,
}

impl Coefficients {
    /// Creates a coefficient triple.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

/// The outcome of solving an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    /// The equation holds for no `x`.
    NoSolution,
    /// The equation holds for every `x`.
    InfiniteSolutions,
    /// The unique solution of a linear equation.
    SingleValue(f64),
    /// Two distinct real roots; the first uses `+√D`.
    TwoRealRoots(f64, f64),
    /// A repeated real root (zero discriminant).
    OneRealRoot(f64),
    /// Conjugate roots `real ± imag·i`.
    ComplexRootPair {
        /// Shared real part, `-b / 2a`.
        real: f64,
        /// Imaginary magnitude, `√(-D) / 2a`.
        imag: f64,
    },
}

/// Renders the outcome as the solver widgets show it.
///
/// ```
/// use calcboard::solver::Solution;
///
/// assert_eq!(Solution::SingleValue(2.0).to_string(), "x = 2");
/// assert_eq!(Solution::TwoRealRoots(3.0, 2.0).to_string(),
///            "Two real roots: x1 = 3, x2 = 2");
/// assert_eq!(Solution::ComplexRootPair { real: -1.0, imag: 2.0 }.to_string(),
///            "Complex roots: x1 = -1 + 2i, x2 = -1 - 2i");
/// ```
impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSolution => write!(f, "No solution."),
            Self::InfiniteSolutions => write!(f, "Infinite solutions (any x)."),
            Self::SingleValue(x) => write!(f, "x = {}", format_number(*x)),
            Self::TwoRealRoots(x1, x2) => write!(f,
                                                 "Two real roots: x1 = {}, x2 = {}",
                                                 format_number(*x1),
                                                 format_number(*x2)),
            Self::OneRealRoot(x) => write!(f, "One real root: x = {}", format_number(*x)),
            Self::ComplexRootPair { real, imag } => {
                let (re, im) = (format_number(*real), format_number(*imag));
                write!(f, "Complex roots: x1 = {re} + {im}i, x2 = {re} - {im}i")
            },
        }
    }
}
