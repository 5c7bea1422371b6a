use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg, utils::map_elementwise},
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::f64_to_usize_checked,
};

/// Most decimal places `round(x, n)` accepts.
const MAX_ROUND_DIGITS: usize = 15;

/// Applies `floor`, `ceil` or `round` to a value.
///
/// Complex numbers are rounded part by part. `round` takes an optional
/// number of decimal places between 0 and 15; halves round away from zero.
///
/// # Errors
/// `InvalidArgument` for a digit count outside `0..=15`, and conversion
/// errors for a fractional one.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::rounding::round_with, value::core::Value};
///
/// assert_eq!(round_with("floor", &[Value::Real(-1.5)], 1).unwrap(), Value::Real(-2.0));
/// assert_eq!(round_with("round", &[Value::Real(2.5)], 1).unwrap(), Value::Real(3.0));
///
/// let r = round_with("round", &[Value::Real(3.14159), Value::Real(2.0)], 1).unwrap();
/// assert_eq!(r, Value::Real(3.14));
/// ```
pub fn round_with(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let (value, digits) = match args {
        [value] => (value, 0),
        [value, digits] if name == "round" => {
            let digits = f64_to_usize_checked(digits.as_real(line)?, line)?;
            if digits > MAX_ROUND_DIGITS {
                return Err(RuntimeError::InvalidArgument { details: format!("number of decimals must be in 0..={MAX_ROUND_DIGITS}, found {digits}"),
                                                           line });
            }
            (value, digits)
        },
        _ => {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             found: args.len(),
                                                             line });
        },
    };

    let apply = |x: f64| -> f64 {
        match name {
            "floor" => x.floor(),
            "ceil" => x.ceil(),
            _ => round_to(x, digits),
        }
    };

    map_elementwise(value, line, &|v| match v {
        Value::Real(x) => Ok(Value::Real(apply(*x))),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
        Value::Complex(c) => Ok(Value::Complex(ComplexNumber::new(apply(c.real),
                                                                  apply(c.imaginary)))),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    })
}

/// Rounds to `digits` decimal places.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn round_to(x: f64, digits: usize) -> f64 {
    if digits == 0 || !x.is_finite() {
        return x.round();
    }
    let scale = 10f64.powi(digits as i32);
    let rounded = (x * scale).round() / scale;
    if rounded.is_finite() { rounded } else { x }
}

/// Returns the sign of a value: `-1`, `0` or `1` for reals, and `z / |z|` for
/// complex numbers. `NaN` stays `NaN`.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::rounding::sign, value::core::Value};
///
/// assert_eq!(sign(&[Value::Real(-3.2)], 1).unwrap(), Value::Real(-1.0));
/// assert_eq!(sign(&[Value::Real(0.0)], 1).unwrap(), Value::Real(0.0));
/// ```
pub fn sign(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("sign", args, line)?;

    map_elementwise(value, line, &|v| match v {
        Value::Real(x) if *x == 0.0 || x.is_nan() => Ok(Value::Real(*x)),
        Value::Real(x) => Ok(Value::Real(x.signum())),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
        Value::Complex(c) if c.is_zero() => Ok(Value::Complex(*c)),
        Value::Complex(c) => {
            let magnitude = c.abs();
            Ok(Value::Complex(ComplexNumber::new(c.real / magnitude, c.imaginary / magnitude)))
        },
        _ => Err(RuntimeError::ExpectedNumber { line }),
    })
}
