use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Converts a scalar operand to a number: booleans become `1` or `0`.
///
/// # Errors
/// `TypeError` for arrays and objects.
pub fn to_number(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Real(_) | Value::Complex(_) => Ok(value.clone()),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
        Value::Array(_) | Value::Map(_) => {
            Err(RuntimeError::TypeError { details: format!("Unexpected type of argument ({})",
                                                           value.type_name()),
                                          line })
        },
    }
}

/// Floored modulo: the result takes the sign of the divisor and
/// `mod(x, 0) = x`.
///
/// # Example
/// ```
/// use calcboard::interpreter::evaluator::binary::scalar::floored_mod;
///
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floored_mod(7.0, -3.0), -2.0);
/// assert_eq!(floored_mod(5.5, 0.0), 5.5);
/// ```
#[must_use]
pub fn floored_mod(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        return x;
    }
    x - y * (x / y).floor()
}

impl Context {
    /// Evaluates a scalar arithmetic operation: `+ - * / %`.
    ///
    /// Booleans count as `1` and `0`. Real operands follow IEEE-754, so
    /// `1 / 0` is `Infinity`. If either side is complex the other is promoted
    /// and the operation is carried out in the complex plane.
    ///
    /// # Errors
    /// - `DivisionByZero` for a complex division by zero.
    /// - `TypeError` for `%` on complex numbers or for non-numeric operands.
    ///
    /// # Example
    /// ```
    /// use calcboard::{ast::BinaryOperator,
    ///                 interpreter::{evaluator::core::Context,
    ///                               value::{complex::ComplexNumber, core::Value}}};
    ///
    /// let r = Context::eval_scalar_op(BinaryOperator::Mul, &1.5.into(), &2.0.into(), 1).unwrap();
    /// assert_eq!(r, Value::Real(3.0));
    ///
    /// let r = Context::eval_scalar_op(BinaryOperator::Div, &1.0.into(), &0.0.into(), 1).unwrap();
    /// assert_eq!(r, Value::Real(f64::INFINITY));
    ///
    /// let z = Value::from(ComplexNumber::new(1.0, 2.0));
    /// let r = Context::eval_scalar_op(BinaryOperator::Add, &z, &true.into(), 1).unwrap();
    /// assert_eq!(r, Value::from(ComplexNumber::new(2.0, 2.0)));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let left = to_number(left, line)?;
        let right = to_number(right, line)?;

        if let (Value::Real(a), Value::Real(b)) = (&left, &right) {
            let (a, b) = (*a, *b);
            return Ok(Value::Real(match op {
                                      Add => a + b,
                                      Sub => a - b,
                                      Mul => a * b,
                                      Div => a / b,
                                      Mod => floored_mod(a, b),
                                      _ => return Err(unsupported(op, &left, &right, line)),
                                  }));
        }

        let a = left.as_complex(line)?;
        let b = right.as_complex(line)?;

        Ok(Value::Complex(match op {
                              Add => a + b,
                              Sub => a - b,
                              Mul => a * b,
                              Div => {
                                  if b.is_zero() {
                                      return Err(RuntimeError::DivisionByZero { line });
                                  }
                                  a / b
                              },
                              _ => return Err(unsupported(op, &left, &right, line)),
                          }))
    }
}

/// Builds the error for an operator that has no meaning for the operands.
pub(in crate::interpreter::evaluator) fn unsupported(op: BinaryOperator,
                                                     left: &Value,
                                                     right: &Value,
                                                     line: usize)
                                                     -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot apply {op} to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
