use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::scalar::{to_number, unsupported},
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Booleans compare as `1` and `0`, so `true == 1`. Complex numbers
    /// support `==` and `!=` only; they have no ordering. `NaN` is unequal to
    /// everything, itself included.
    ///
    /// # Example
    /// ```
    /// use calcboard::{ast::BinaryOperator,
    ///                 interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &3.0.into(), &5.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &true.into(), &1.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let left = to_number(left, line)?;
        let right = to_number(right, line)?;

        if let (Value::Real(a), Value::Real(b)) = (&left, &right) {
            return Ok(Value::Bool(match op {
                                      Less => a < b,
                                      Greater => a > b,
                                      LessEqual => a <= b,
                                      GreaterEqual => a >= b,
                                      Equal => a == b,
                                      NotEqual => a != b,
                                      _ => return Err(unsupported(op, &left, &right, line)),
                                  }));
        }

        let a = left.as_complex(line)?;
        let b = right.as_complex(line)?;
        let equal = a.real == b.real && a.imaginary == b.imaginary;

        match op {
            Equal => Ok(Value::Bool(equal)),
            NotEqual => Ok(Value::Bool(!equal)),
            _ => Err(RuntimeError::TypeError { details: format!("No ordering relation is defined for complex numbers ({op})"),
                                               line }),
        }
    }
}
