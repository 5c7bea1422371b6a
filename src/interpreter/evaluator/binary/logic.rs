use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::scalar::unsupported,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two values.
    ///
    /// The operands are converted to booleans using `as_bool`, so non-zero
    /// numbers are true.
    ///
    /// # Example
    /// ```
    /// use calcboard::{ast::BinaryOperator,
    ///                 interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &false.into(), &2.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        match op {
            BinaryOperator::And => Ok(Value::Bool(left.as_bool(line)? && right.as_bool(line)?)),
            BinaryOperator::Or => Ok(Value::Bool(left.as_bool(line)? || right.as_bool(line)?)),
            _ => Err(unsupported(op, left, right, line)),
        }
    }
}
