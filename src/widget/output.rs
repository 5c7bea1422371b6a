use std::fmt::Display;

/// The text a widget shows, and whether it should be styled as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOutput {
    /// Display text.
    pub text:     String,
    /// Set for degenerate equations, invalid input and evaluator failures.
    pub is_error: bool,
}

impl WidgetOutput {
    /// A normal result.
    pub fn ok(text: impl Into<String>) -> Self {
        Self { text:     text.into(),
               is_error: false, }
    }

    /// An error or advisory result.
    pub fn error(text: impl Into<String>) -> Self {
        Self { text:     text.into(),
               is_error: true, }
    }
}

impl Display for WidgetOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
