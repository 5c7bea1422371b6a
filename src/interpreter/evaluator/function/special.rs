use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::single_arg,
            unary,
            utils::{euler_gamma, map_elementwise},
        },
        value::core::Value,
    },
};

/// The gamma function for real arguments.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::special::gamma, value::core::Value};
///
/// assert_eq!(gamma(&[Value::Real(5.0)], 1).unwrap(), Value::Real(24.0));
/// ```
pub fn gamma(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("gamma", args, line)?;
    map_elementwise(value, line, &|v| Ok(Value::Real(euler_gamma(v.as_real(line)?))))
}

/// `factorial(n)`, the function form of `n!`.
pub fn factorial(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("factorial", args, line)?;
    map_elementwise(value, line, &|v| unary::factorial(v, line))
}

/// The Euclidean norm of the arguments, `sqrt(a² + b² + ...)`.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::special::hypot, value::core::Value};
///
/// assert_eq!(hypot(&[Value::Real(3.0), Value::Real(4.0)], 1).unwrap(), Value::Real(5.0));
/// ```
pub fn hypot(args: &[Value], line: usize) -> EvalResult<Value> {
    let mut total: f64 = 0.0;
    for arg in args {
        let magnitude = match arg {
            Value::Real(x) => x.abs(),
            Value::Complex(c) => c.abs(),
            _ => return Err(RuntimeError::ExpectedNumber { line }),
        };
        total = total.hypot(magnitude);
    }
    Ok(Value::Real(total))
}

/// `pow(x, y)`, the function form of `x ^ y`.
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    binary_form("pow", BinaryOperator::Pow, args, line)
}

/// `mod(x, y)`, the function form of `x % y`.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::special::modulo, value::core::Value};
///
/// assert_eq!(modulo(&[Value::Real(-1.0), Value::Real(4.0)], 1).unwrap(), Value::Real(3.0));
/// ```
pub fn modulo(args: &[Value], line: usize) -> EvalResult<Value> {
    binary_form("mod", BinaryOperator::Mod, args, line)
}

/// Evaluates a two-argument builtin exactly like its operator.
fn binary_form(name: &str, op: BinaryOperator, args: &[Value], line: usize) -> EvalResult<Value> {
    let [left, right] = args else {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         found: args.len(),
                                                         line });
    };
    Context::eval_binary(op, left, right, line)
}
