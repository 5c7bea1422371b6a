use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    format::value::render_value,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that an expression can produce:
/// scalars (real, boolean, complex) and the two structured forms, arrays and
/// maps.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`), produced by comparisons and
    /// logical operators.
    Bool(bool),
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
    /// An ordered list of values. Nested arrays form matrices.
    Array(Rc<Vec<Self>>),
    /// Key/value pairs in insertion order with unique keys.
    Map(Rc<Vec<(String, Self)>>),
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Builds a map value from entries, keeping the first position of a
    /// repeated key and the last value assigned to it.
    ///
    /// # Example
    /// ```
    /// use calcboard::interpreter::value::core::Value;
    ///
    /// let map = Value::map(vec![("a".into(), 1.0.into()),
    ///                           ("b".into(), 2.0.into()),
    ///                           ("a".into(), 3.0.into())]);
    ///
    /// let Value::Map(entries) = map else { unreachable!() };
    /// assert_eq!(entries.len(), 2);
    /// assert_eq!(entries[0], ("a".to_string(), Value::Real(3.0)));
    /// ```
    #[must_use]
    pub fn map(entries: Vec<(String, Self)>) -> Self {
        let mut unique: Vec<(String, Self)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            if let Some(slot) = unique.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = value;
            } else {
                unique.push((key, value));
            }
        }
        Self::Map(Rc::new(unique))
    }
    /// Converts the value to an `f64`, or returns an error if it is not a
    /// real number.
    ///
    /// # Example
    /// ```
    /// use calcboard::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Real(10.0).as_real(1).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_real(1).is_err());
    /// ```
    pub const fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }
    /// Converts the value to `ComplexNumber`, or returns an error if not
    /// numeric.
    pub fn as_complex(&self, line: usize) -> EvalResult<ComplexNumber> {
        match self {
            Self::Complex(c) => Ok(*c),
            Self::Real(r) => Ok(ComplexNumber::from(*r)),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }
    /// Interprets the value as a condition.
    ///
    /// Booleans are taken as-is and real numbers are true when non-zero
    /// (`NaN` is false).
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Real(r) => Ok(*r != 0.0 && !r.is_nan()),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }
    /// Borrows the elements of an array.
    pub fn as_slice(&self, line: usize) -> EvalResult<&[Self]> {
        match self {
            Self::Array(v) => Ok(v),
            _ => Err(RuntimeError::TypeError { details: format!("Array expected, but found {}",
                                                                 self.type_name()),
                                               line }),
        }
    }
    /// Returns the name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Real(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Complex(_) => "complex number",
            Self::Array(_) => "array",
            Self::Map(_) => "object",
        }
    }
    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
    /// Returns `true` if the value is [`Value::Complex`].
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(..))
    }
}

/// Values display exactly as the expression widget shows them.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_value(self))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Complex(complex) => (*complex).into(),
        }
    }
}
