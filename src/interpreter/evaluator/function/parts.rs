use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg, utils::map_elementwise},
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Applies `f` to the complex form of each numeric scalar in the argument.
fn complex_part(name: &str,
                args: &[Value],
                line: usize,
                f: fn(ComplexNumber) -> Value)
                -> EvalResult<Value> {
    let value = single_arg(name, args, line)?;

    map_elementwise(value, line, &|v| match v {
        Value::Bool(b) => Ok(f(ComplexNumber::from(f64::from(u8::from(*b))))),
        Value::Real(_) | Value::Complex(_) => Ok(f(v.as_complex(line)?)),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    })
}

/// The real part of a number.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::parts::{im, re},
///                              value::{complex::ComplexNumber, core::Value}};
///
/// let z = Value::Complex(ComplexNumber::new(3.0, -4.0));
/// assert_eq!(re(&[z.clone()], 1).unwrap(), Value::Real(3.0));
/// assert_eq!(im(&[z], 1).unwrap(), Value::Real(-4.0));
/// ```
pub fn re(args: &[Value], line: usize) -> EvalResult<Value> {
    complex_part("re", args, line, |z| Value::Real(z.real))
}

/// The imaginary part of a number; `0` for reals.
pub fn im(args: &[Value], line: usize) -> EvalResult<Value> {
    complex_part("im", args, line, |z| Value::Real(z.imaginary))
}

/// The complex conjugate. Reals are returned unchanged.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::parts::conj,
///                              value::{complex::ComplexNumber, core::Value}};
///
/// let z = Value::Complex(ComplexNumber::new(1.0, 2.0));
/// assert_eq!(conj(&[z], 1).unwrap(),
///            Value::Complex(ComplexNumber::new(1.0, -2.0)));
/// assert_eq!(conj(&[Value::Real(5.0)], 1).unwrap(), Value::Real(5.0));
/// ```
pub fn conj(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("conj", args, line)?;

    map_elementwise(value, line, &|v| match v {
        Value::Real(_) => Ok(v.clone()),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
        Value::Complex(c) => Ok(Value::Complex(c.conj())),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    })
}

/// The argument (phase angle) in radians; `π` for negative reals.
pub fn arg(args: &[Value], line: usize) -> EvalResult<Value> {
    complex_part("arg", args, line, |z| Value::Real(z.arg()))
}
