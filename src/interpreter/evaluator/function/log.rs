use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::single_arg, utils::map_elementwise},
        value::core::Value,
    },
};

/// Computes the logarithm of a value, optionally with respect to a base.
///
/// `log(x)` is the natural logarithm; `log(x, base)` is
/// `ln(x) / ln(base)`. Non-negative reals stay real (`log(0)` is
/// `-Infinity`); negative or complex input yields the principal complex
/// logarithm.
///
/// # Errors
/// `DivisionByZero` when `ln(base)` is zero, i.e. for base `1`.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let r = log(&[Value::Real(8.0), Value::Real(2.0)], 1).unwrap();
/// assert_eq!(r, Value::Real(3.0));
///
/// let r = log(&[Value::Real(-1.0)], 1).unwrap();
/// assert!(r.is_complex());
/// ```
pub fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    match args {
        [value] => map_elementwise(value, line, &|v| ln(v, line)),
        [value, base] => {
            let ln_base = ln(base, line)?;
            map_elementwise(value, line, &|v| divide_logs(&ln(v, line)?, &ln_base, line))
        },
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "log".to_string(),
                                                       found: args.len(),
                                                       line }),
    }
}

/// Base-10 logarithm.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::log::log10, value::core::Value};
///
/// assert_eq!(log10(&[Value::Real(1000.0)], 1).unwrap(), Value::Real(3.0));
/// ```
pub fn log10(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("log10", args, line)?;
    map_elementwise(value, line, &|v| match v {
        Value::Real(r) if *r >= 0.0 => Ok(Value::Real(r.log10())),
        _ => divide_logs(&ln(v, line)?, &Value::Real(std::f64::consts::LN_10), line),
    })
}

/// Base-2 logarithm.
pub fn log2(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = single_arg("log2", args, line)?;
    map_elementwise(value, line, &|v| match v {
        Value::Real(r) if *r >= 0.0 => Ok(Value::Real(r.log2())),
        _ => divide_logs(&ln(v, line)?, &Value::Real(std::f64::consts::LN_2), line),
    })
}

/// Natural logarithm of a scalar, moving into the complex plane for negative
/// input.
fn ln(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Real(r) if *r >= 0.0 || r.is_nan() => Ok(Value::Real(r.ln())),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)).ln())),
        Value::Real(_) | Value::Complex(_) => Ok(Value::Complex(value.as_complex(line)?.ln())),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Divides two logarithms, staying real when both are real.
fn divide_logs(ln_value: &Value, ln_base: &Value, line: usize) -> EvalResult<Value> {
    if let (Value::Real(a), Value::Real(b)) = (ln_value, ln_base) {
        if *b == 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        return Ok(Value::Real(a / b));
    }

    let base = ln_base.as_complex(line)?;
    if base.is_zero() {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(Value::Complex(ln_value.as_complex(line)? / base))
}
