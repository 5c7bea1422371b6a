use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies an elementwise binary operation to one or two values.
    ///
    /// This function unifies all array binary evaluation paths:
    /// - Array with array (lengths must match at every level)
    /// - Array with scalar
    /// - Scalar with array
    /// - Scalar with scalar, handled by `f`
    ///
    /// Operand order is preserved, so `10 - [1, 2]` is `[9, 8]`.
    ///
    /// # Example
    /// ```
    /// use calcboard::{ast::BinaryOperator,
    ///                 interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// let left = Value::from(vec![1.0.into(), 2.0.into()]);
    /// let right = Value::from(vec![10.0.into(), 20.0.into()]);
    ///
    /// let r = Context::map_array_binary(BinaryOperator::Add, &left, &right, 1, &|l, r| {
    ///             Context::eval_scalar_op(BinaryOperator::Add, l, r, 1)
    ///         }).unwrap();
    ///
    /// assert_eq!(r, Value::from(vec![11.0.into(), 22.0.into()]));
    /// ```
    pub fn map_array_binary<F>(op: BinaryOperator,
                               left: &Value,
                               right: &Value,
                               line: usize,
                               f: &F)
                               -> EvalResult<Value>
        where F: Fn(&Value, &Value) -> EvalResult<Value>
    {
        match (left, right) {
            (Value::Array(larr), Value::Array(rarr)) => {
                if larr.len() != rarr.len() {
                    return Err(RuntimeError::DimensionMismatch { details: format!("cannot apply {op} to arrays of length {} and {}",
                                                                                  larr.len(),
                                                                                  rarr.len()),
                                                                 line });
                }

                let out = larr.iter()
                              .zip(rarr.iter())
                              .map(|(l, r)| Self::map_array_binary(op, l, r, line, f))
                              .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(out))
            },

            (Value::Array(arr), scalar) => {
                let out = arr.iter()
                             .map(|l| Self::map_array_binary(op, l, scalar, line, f))
                             .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(out))
            },

            (scalar, Value::Array(arr)) => {
                let out = arr.iter()
                             .map(|r| Self::map_array_binary(op, scalar, r, line, f))
                             .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(out))
            },

            (l, r) => f(l, r),
        }
    }
}
