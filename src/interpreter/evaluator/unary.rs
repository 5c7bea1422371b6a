use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{euler_gamma, map_elementwise},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for reals, booleans and complex numbers.
    /// - `Plus`: converts booleans to numbers and leaves numbers unchanged.
    /// - `Not`: logical negation; numbers are true when non-zero.
    /// - `Factorial`: `n!` for non-negative numbers, via `Γ(n + 1)` for
    ///   fractional input.
    ///
    /// All operators apply element-wise to arrays.
    ///
    /// # Example
    /// ```
    /// use calcboard::{ast::UnaryOperator,
    ///                 interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Real(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Real(-5.0));
    ///
    /// // Boolean not
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Real(0.0), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// // Factorial: 4! = 24
    /// let v = Context::eval_unary(UnaryOperator::Factorial, &Value::Real(4.0), 1).unwrap();
    /// assert_eq!(v, Value::Real(24.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        map_elementwise(value, line, &|v| match op {
            UnaryOperator::Negate => match v {
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Bool(b) => Ok(Value::Real(-f64::from(u8::from(*b)))),
                Value::Complex(c) => Ok(Value::Complex(-*c)),
                _ => Err(RuntimeError::ExpectedNumber { line }),
            },
            UnaryOperator::Plus => match v {
                Value::Real(_) | Value::Complex(_) => Ok(v.clone()),
                Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
                _ => Err(RuntimeError::ExpectedNumber { line }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!v.as_bool(line)?)),
            UnaryOperator::Factorial => factorial(v, line),
        })
    }
}

/// Computes `x!` for a single value.
///
/// # Errors
/// `InvalidArgument` for negative input, `ExpectedNumber` for anything that
/// is not a real number.
pub fn factorial(value: &Value, line: usize) -> EvalResult<Value> {
    let x = match value {
        Value::Real(x) => *x,
        _ => {
            return Err(RuntimeError::TypeError { details: format!("Factorial not defined for {}",
                                                                  value.type_name()),
                                                 line });
        },
    };

    if x < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("factorial is not defined for negative value {x}"),
                                                   line });
    }

    Ok(Value::Real(euler_gamma(x + 1.0)))
}
