use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::single_arg,
            utils::map_elementwise,
        },
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Defines a unary builtin with real and complex variants.
///
/// The generated function accepts exactly one argument and applies
/// element-wise to arrays:
/// - Reals (and booleans) use the corresponding `f64` method.
/// - Complex values use the `ComplexNumber` method.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::elementary::sin, value::core::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 1).unwrap();
///
/// assert_eq!(r, Value::Real(1.0));
/// ```
macro_rules! real_complex_builtin {
    ($fname:ident, $real_fn:ident, $complex_fn:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            let value = single_arg(stringify!($fname), args, line)?;

            map_elementwise(value, line, &|v| match v {
                Value::Real(r) => Ok(Value::Real(r.$real_fn())),
                Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)).$real_fn())),
                Value::Complex(c) => Ok(Value::Complex(ComplexNumber::$complex_fn(*c))),
                _ => Err(RuntimeError::ExpectedNumber { line }),
            })
        }
    };
}

/// Defines a unary builtin that only exists for real numbers.
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            let value = single_arg(stringify!($fname), args, line)?;

            map_elementwise(value, line, &|v| match v {
                Value::Real(r) => Ok(Value::Real(r.$real_fn())),
                Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)).$real_fn())),
                _ => Err(RuntimeError::ExpectedNumber { line }),
            })
        }
    };
}

real_complex_builtin!(sin, sin, sin);
real_complex_builtin!(cos, cos, cos);
real_complex_builtin!(tan, tan, tan);
real_complex_builtin!(exp, exp, exp);
real_complex_builtin!(sinh, sinh, sinh);
real_complex_builtin!(cosh, cosh, cosh);
real_complex_builtin!(tanh, tanh, tanh);

real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);

/// `atan2(y, x)`: the angle of the point `(x, y)`, in `(-π, π]`.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::function::elementary::atan2, value::core::Value};
///
/// let r = atan2(&[Value::Real(1.0), Value::Real(0.0)], 1).unwrap();
/// assert_eq!(r, Value::Real(std::f64::consts::FRAC_PI_2));
/// ```
pub fn atan2(args: &[Value], line: usize) -> EvalResult<Value> {
    let [y, x] = args else {
        return Err(RuntimeError::ArgumentCountMismatch { name: "atan2".to_string(),
                                                         found: args.len(),
                                                         line });
    };

    Context::map_array_binary(BinaryOperator::Div, y, x, line, &|y, x| {
        Ok(Value::Real(y.as_real(line)?.atan2(x.as_real(line)?)))
    })
}
