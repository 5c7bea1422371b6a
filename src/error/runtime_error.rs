#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Referenced a name that is neither a variable nor a constant.
    UndefinedSymbol {
        /// The name of the symbol.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to redefine a builtin function or constant.
    ReservedRedefinition {
        /// The reserved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A real number was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean (or number usable as one) was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The function being called.
        name:  String,
        /// The number of arguments that were supplied.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to access an array element outside the allowed bounds.
    IndexOutOfBounds {
        /// The largest valid (1-based) index.
        max:   usize,
        /// The index that was actually requested.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Operand shapes do not fit together.
    DimensionMismatch {
        /// Details about the mismatching shapes.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted complex division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a fractional number where an integer was required.
    RealIsFractional {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number was too large to be used as an integer.
    ValueTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// User-defined functions called themselves too deeply.
    RecursionLimit {
        /// The function that exceeded the limit.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Evaluation recursed deeper than the evaluator allows.
    NestingTooDeep {
        /// The source line of the expression that hit the limit.
        line: usize,
    },
    /// The last statement was a function definition, which has no value.
    NoValue {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedSymbol { name, line } => {
                write!(f, "Undefined symbol {name} (line {line})")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Undefined function {name} (line {line})")
            },
            Self::ReservedRedefinition { name, line } => {
                write!(f, "Cannot redefine built-in '{name}' (line {line})")
            },
            Self::TypeError { details, line } => write!(f, "{details} (line {line})"),
            Self::ExpectedNumber { line } => write!(f, "Real number expected (line {line})"),
            Self::ExpectedBoolean { line } => {
                write!(f, "Boolean or number expected (line {line})")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Invalid argument: {details} (line {line})")
            },
            Self::ArgumentCountMismatch { name, found, line } => write!(f,
                                                                        "Wrong number of arguments in function {name} ({found} provided) (line {line})"),
            Self::IndexOutOfBounds { max, found, line } => write!(f,
                                                                  "Index out of range ({found} not in 1..{max}) (line {line})"),
            Self::DimensionMismatch { details, line } => {
                write!(f, "Dimension mismatch: {details} (line {line})")
            },
            Self::DivisionByZero { line } => write!(f, "Division by zero (line {line})"),
            Self::RealIsFractional { line } => write!(f,
                                                      "Integer expected, but found a fractional value (line {line})"),
            Self::ValueTooLarge { line } => {
                write!(f, "Value is too large to be used as an integer (line {line})")
            },
            Self::RecursionLimit { name, line } => {
                write!(f, "Maximum recursion depth exceeded in {name} (line {line})")
            },
            Self::NestingTooDeep { line } => {
                write!(f, "Expression is nested too deeply to evaluate (line {line})")
            },
            Self::NoValue { line } => {
                write!(f, "Expression does not produce a value (line {line})")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
