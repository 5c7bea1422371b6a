#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character sequence that is not part of the language.
    InvalidCharacter {
        /// The offending slice of source text.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `|` token was expected but not found.
    ExpectedPipe {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A map entry was not of the form `key: value`.
    InvalidMapEntry {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The function definition syntax was invalid.
    InvalidFunctionDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a statement should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Sub-expressions are nested deeper than the parser allows.
    NestingTooDeep {
        /// The source line where the limit was reached.
        line: usize,
    },
    /// Tried to bind a reserved identifier name.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { slice, line } => {
                write!(f, "Invalid character '{slice}' (line {line})")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Unexpected token {token} (line {line})")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Unexpected end of expression (line {line})")
            },
            Self::ExpectedClosingParen { line } => {
                write!(f, "Parenthesis ')' expected (line {line})")
            },
            Self::ExpectedClosingBracket { line } => {
                write!(f, "Bracket ']' expected (line {line})")
            },
            Self::ExpectedPipe { line } => {
                write!(f, "Closing '|' of absolute value expected (line {line})")
            },
            Self::InvalidMapEntry { line } => write!(f,
                                                     "Object entries must look like 'key: value' (line {line})"),
            Self::InvalidFunctionDefinition { line } => write!(f,
                                                               "Invalid function definition, for example f(x) = x ^ 2 (line {line})"),
            Self::UnexpectedTrailingTokens { token, line } => {
                write!(f, "Unexpected {token} after end of statement (line {line})")
            },
            Self::NestingTooDeep { line } => {
                write!(f, "Expression is nested too deeply (line {line})")
            },
            Self::IdentifierReserved { name, line } => {
                write!(f, "Identifier '{name}' is reserved (line {line})")
            },
        }
    }
}

impl std::error::Error for ParseError {}
