use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// `*` between two arrays is a dot or matrix product. Every other
    /// combination involving arrays is applied element-wise, broadcasting
    /// scalars across arrays. Scalars are routed to the arithmetic, power,
    /// comparison or logic handlers.
    ///
    /// # Example
    /// ```
    /// use calcboard::{ast::BinaryOperator,
    ///                 interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// let left = Value::Real(3.0);
    /// let right = Value::Real(4.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Real(7.0));
    ///
    /// let v = Value::from(vec![1.0.into(), 2.0.into()]);
    /// let result = Context::eval_binary(BinaryOperator::Sub, &10.0.into(), &v, 1);
    /// assert_eq!(result.unwrap(), Value::from(vec![9.0.into(), 8.0.into()]));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        if op == BinaryOperator::Mul && left.is_array() && right.is_array() {
            return Self::eval_matmul(left, right, line);
        }

        Self::map_array_binary(op, left, right, line, &|l, r| {
            Self::eval_scalar_binary(op, l, r, line)
        })
    }

    /// Applies `op` to two non-array operands.
    fn eval_scalar_binary(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, line),
            Pow => Self::eval_pow(left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Or => Self::eval_logic(op, left, right, line),
        }
    }
}
