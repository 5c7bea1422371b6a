#[derive(Debug, Clone, PartialEq, Eq)]
/// Rejection of a coefficient text field.
pub enum InputError {
    /// The text does not parse to a finite number.
    InvalidNumber {
        /// Name of the field the text came from (`a`, `b` or `c`).
        field: &'static str,
        /// The rejected text, trimmed.
        text:  String,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { field, text } => {
                write!(f, "Coefficient {field} = '{text}' is not a finite number")
            },
        }
    }
}

impl std::error::Error for InputError {}
