use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg, utils::map_elementwise},
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Computes square roots.
///
/// - Non-negative reals return a real square root.
/// - Negative reals return a purely imaginary complex result.
/// - Complex values use their principal complex square root.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::sqrt::sqrt,
///                              value::{complex::ComplexNumber, core::Value}};
///
/// assert_eq!(sqrt(&[Value::Real(9.0)], 1).unwrap(), Value::Real(3.0));
/// assert_eq!(sqrt(&[Value::Real(-4.0)], 1).unwrap(),
///            Value::Complex(ComplexNumber::new(0.0, 2.0)));
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("sqrt", args, line)?;

    map_elementwise(value, line, &|v| match v {
        Value::Real(x) if *x >= 0.0 || x.is_nan() => Ok(Value::Real(x.sqrt())),
        Value::Real(x) => Ok(Value::Complex(ComplexNumber::new(0.0, (-x).sqrt()))),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
        Value::Complex(c) => Ok(Value::Complex(c.sqrt())),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    })
}

/// Computes the real cube root; complex input yields the principal root.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::sqrt::cbrt, value::core::Value};
///
/// assert_eq!(cbrt(&[Value::Real(-27.0)], 1).unwrap(), Value::Real(-3.0));
/// ```
pub fn cbrt(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("cbrt", args, line)?;

    map_elementwise(value, line, &|v| match v {
        Value::Real(x) => Ok(Value::Real(x.cbrt())),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
        Value::Complex(c) => Ok(Value::Complex(c.powf(1.0 / 3.0))),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    })
}

/// Computes the real `n`-th root, `nthRoot(x, n)`; `n` defaults to 2.
///
/// Negative radicands are allowed for odd integral `n` and give a negative
/// root, so `nthRoot(-8, 3)` is `-2`.
///
/// # Errors
/// - `DivisionByZero` for `n = 0`.
/// - `InvalidArgument` for a negative radicand with an even or fractional
///   root.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::sqrt::nth_root, value::core::Value};
///
/// let r = nth_root(&[Value::Real(-8.0), Value::Real(3.0)], 1).unwrap();
/// assert_eq!(r, Value::Real(-2.0));
///
/// assert!(nth_root(&[Value::Real(-16.0), Value::Real(4.0)], 1).is_err());
/// ```
pub fn nth_root(args: &[Value], line: usize) -> EvalResult<Value> {
    let (value, root) = match args {
        [value] => (value, 2.0),
        [value, root] => (value, root.as_real(line)?),
        _ => {
            return Err(RuntimeError::ArgumentCountMismatch { name: "nthRoot".to_string(),
                                                             found: args.len(),
                                                             line });
        },
    };

    if root == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let odd_root = root.fract() == 0.0 && root % 2.0 != 0.0;

    map_elementwise(value, line, &|v| {
        let x = v.as_real(line)?;
        if x >= 0.0 {
            Ok(Value::Real(x.powf(root.recip())))
        } else if odd_root {
            Ok(Value::Real(-(-x).powf(root.recip())))
        } else {
            Err(RuntimeError::InvalidArgument { details: format!("root must be odd when the radicand is negative ({x})"),
                                                line })
        }
    })
}
