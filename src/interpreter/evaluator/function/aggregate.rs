use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::matmul::shape_of,
            core::{Context, EvalResult},
            function::core::single_arg,
        },
        value::core::Value,
    },
    util::num::usize_to_f64_checked,
};

/// Collects the scalars of an argument list, flattening arrays at any depth.
///
/// Both `max(1, 5, 3)` and `max([1, 5, 3])` see the same three values.
fn flatten(args: &[Value], out: &mut Vec<Value>) {
    for arg in args {
        match arg {
            Value::Array(elements) => flatten(elements, out),
            scalar => out.push(scalar.clone()),
        }
    }
}

/// Computes the minimum or maximum of all numeric arguments.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. If any value is `NaN` the result is `NaN`.
///
/// # Errors
/// `InvalidArgument` if there is nothing to compare, `ExpectedNumber` for
/// non-real values.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::aggregate::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Real(3.0), Value::Real(7.0)], 1).unwrap();
/// assert_eq!(r, 3.0.into());
///
/// let list = Value::from(vec![2.5.into(), 1.0.into()]);
/// let r = min_max("max", &[list], 1).unwrap();
/// assert_eq!(r, 2.5.into());
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut values = Vec::new();
    flatten(args, &mut values);

    let mut reals = values.iter().map(|v| match v {
                                     Value::Bool(b) => Ok(f64::from(u8::from(*b))),
                                     other => other.as_real(line),
                                 });

    let first = reals.next()
                     .ok_or_else(|| RuntimeError::InvalidArgument { details: format!("{name} of an empty list"),
                                                                    line })??;

    reals.try_fold(first, |best, next| {
             let next = next?;
             Ok(if best.is_nan() || next.is_nan() {
                    f64::NAN
                } else if name == "min" {
                    best.min(next)
                } else {
                    best.max(next)
                })
         })
         .map(Value::Real)
}

/// Sums all arguments; an empty sum is `0`.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::aggregate::sum, value::core::Value};
///
/// let list = Value::from(vec![1.0.into(), 2.0.into(), 3.5.into()]);
/// assert_eq!(sum(&[list], 1).unwrap(), Value::Real(6.5));
/// assert_eq!(sum(&[], 1).unwrap(), Value::Real(0.0));
/// ```
pub fn sum(args: &[Value], line: usize) -> EvalResult<Value> {
    fold(args, BinaryOperator::Add, 0.0, line)
}

/// Multiplies all arguments; an empty product is `1`.
pub fn prod(args: &[Value], line: usize) -> EvalResult<Value> {
    fold(args, BinaryOperator::Mul, 1.0, line)
}

/// Arithmetic mean of all arguments.
///
/// # Errors
/// `InvalidArgument` for an empty list.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::aggregate::mean, value::core::Value};
///
/// let r = mean(&[Value::Real(1.0), Value::Real(2.0), Value::Real(6.0)], 1).unwrap();
/// assert_eq!(r, Value::Real(3.0));
/// ```
pub fn mean(args: &[Value], line: usize) -> EvalResult<Value> {
    let mut values = Vec::new();
    flatten(args, &mut values);
    if values.is_empty() {
        return Err(RuntimeError::InvalidArgument { details: "mean of an empty list".to_string(),
                                                   line });
    }

    let total = fold(&values, BinaryOperator::Add, 0.0, line)?;
    let count = Value::Real(usize_to_f64_checked(values.len(), line)?);
    Context::eval_scalar_op(BinaryOperator::Div, &total, &count, line)
}

/// Returns the dimensions of a value as an array: `size([[1, 2, 3]])` is
/// `[1, 3]`; scalars have the empty size `[]`.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::aggregate::size, value::core::Value};
///
/// let row = Value::from(vec![1.0.into(), 2.0.into(), 3.0.into()]);
/// let r = size(&[Value::from(vec![row])], 1).unwrap();
/// assert_eq!(r, Value::from(vec![1.0.into(), 3.0.into()]));
/// ```
pub fn size(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("size", args, line)?;
    let dims = shape_of(value, line)?.into_iter()
                                     .map(|d| usize_to_f64_checked(d, line).map(Value::Real))
                                     .collect::<EvalResult<Vec<_>>>()?;
    Ok(Value::from(dims))
}

/// Folds the flattened arguments with `op`, starting from `initial`.
fn fold(args: &[Value], op: BinaryOperator, initial: f64, line: usize) -> EvalResult<Value> {
    let mut values = Vec::new();
    flatten(args, &mut values);

    values.iter()
          .try_fold(Value::Real(initial), |acc, v| Context::eval_scalar_op(op, &acc, v, line))
}
