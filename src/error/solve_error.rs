#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Degenerate coefficient sets that a solver refuses to treat generically.
pub enum SolveError {
    /// The leading coefficient of a quadratic is zero.
    NotQuadratic,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotQuadratic => {
                write!(f, "This is not quadratic (a must be nonzero). Use the linear solver.")
            },
        }
    }
}

impl std::error::Error for SolveError {}
