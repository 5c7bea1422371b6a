use std::f64::consts;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Bindings, Context, EvalResult},
        value::{complex, core::Value},
    },
    util::num::f64_to_usize_checked,
};

/// Named constants available in every expression.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI),
                                        ("PI", consts::PI),
                                        ("e", consts::E),
                                        ("E", consts::E),
                                        ("tau", consts::TAU),
                                        ("phi", 1.618_033_988_749_895),
                                        ("LN2", consts::LN_2),
                                        ("LN10", consts::LN_10),
                                        ("LOG2E", consts::LOG2_E),
                                        ("LOG10E", consts::LOG10_E),
                                        ("SQRT2", consts::SQRT_2),
                                        ("SQRT1_2", consts::FRAC_1_SQRT_2),
                                        ("Infinity", f64::INFINITY),
                                        ("NaN", f64::NAN)];

/// The imaginary unit's name. It is not a real constant, so it is kept out of
/// [`CONSTANTS`].
pub const IMAGINARY_UNIT: &str = "i";

/// Looks up a built-in constant by name.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::utils::constant, value::core::Value};
///
/// assert_eq!(constant("pi"), Some(Value::Real(std::f64::consts::PI)));
/// assert!(constant("i").is_some_and(|v| v.is_complex()));
/// assert_eq!(constant("x"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<Value> {
    if name == IMAGINARY_UNIT {
        return Some(Value::Complex(complex::I));
    }
    CONSTANTS.iter()
             .find(|(constant, _)| *constant == name)
             .map(|(_, value)| Value::Real(*value))
}

impl Context {
    /// Looks up a name.
    ///
    /// Lookup checks, in order:
    /// 1. Parameter bindings (when evaluating a function body).
    /// 2. Variables assigned earlier in the program.
    /// 3. Built-in constants.
    ///
    /// # Example
    /// ```
    /// use calcboard::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// ctx.variables.insert("x".into(), Value::Real(10.0));
    ///
    /// assert_eq!(ctx.eval_variable("x", 1, None).unwrap(), Value::Real(10.0));
    /// assert!(ctx.eval_variable("y", 1, None).is_err());
    /// ```
    pub fn eval_variable(&self,
                         name: &str,
                         line: usize,
                         bindings: Option<&Bindings>)
                         -> EvalResult<Value> {
        if let Some(b) = bindings
           && let Some(value) = b.get(name)
        {
            return Ok(value.clone());
        }
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }
        constant(name).ok_or_else(|| RuntimeError::UndefinedSymbol { name: name.to_string(),
                                                                     line })
    }

    /// Returns `true` if `name` may not be assigned to.
    #[must_use]
    pub fn is_reserved_variable(name: &str) -> bool {
        constant(name).is_some()
    }

    /// Evaluates `|value|`, the absolute value or complex magnitude, applied
    /// element-wise to arrays.
    ///
    /// # Example
    /// ```
    /// use calcboard::interpreter::{evaluator::core::Context,
    ///                              value::{complex::ComplexNumber, core::Value}};
    ///
    /// let v = Context::eval_abs(&ComplexNumber::new(3.0, -4.0).into(), 1).unwrap();
    /// assert_eq!(v, Value::Real(5.0));
    /// ```
    pub fn eval_abs(value: &Value, line: usize) -> EvalResult<Value> {
        map_elementwise(value, line, &|v| match v {
            Value::Real(r) => Ok(Value::Real(r.abs())),
            Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
            Value::Complex(c) => Ok(Value::Real(c.abs())),
            other => Err(RuntimeError::TypeError { details: format!("Cannot take the absolute value of {}",
                                                                    other.type_name()),
                                                   line }),
        })
    }

    /// Evaluates one-based indexing: `v[2]` picks an element and `m[2, 1]`
    /// picks row 2, column 1.
    ///
    /// # Errors
    /// - `TypeError` if the target (or an intermediate row) is not an array.
    /// - `IndexOutOfBounds` for indices below 1 or past the end.
    /// - Conversion errors for fractional or negative indices.
    pub fn eval_index(target: &Value, indices: &[Value], line: usize) -> EvalResult<Value> {
        let mut current = target.clone();

        for index in indices {
            let position = f64_to_usize_checked(index.as_real(line)?, line)?;
            let elements = current.as_slice(line)?;

            if position == 0 || position > elements.len() {
                return Err(RuntimeError::IndexOutOfBounds { max: elements.len(),
                                                            found: position,
                                                            line });
            }
            current = elements[position - 1].clone();
        }

        Ok(current)
    }
}

/// Applies `f` to every scalar inside `value`, preserving array nesting.
///
/// Scalars are passed to `f` directly; maps are rejected.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::utils::map_elementwise, value::core::Value};
///
/// let doubled = map_elementwise(&Value::from(vec![1.0.into(), 2.0.into()]), 1, &|v| {
///                   Ok(Value::Real(v.as_real(1)? * 2.0))
///               }).unwrap();
///
/// assert_eq!(doubled, Value::from(vec![2.0.into(), 4.0.into()]));
/// ```
pub fn map_elementwise<F>(value: &Value, line: usize, f: &F) -> EvalResult<Value>
    where F: Fn(&Value) -> EvalResult<Value>
{
    match value {
        Value::Array(elements) => {
            let mapped = elements.iter()
                                 .map(|element| map_elementwise(element, line, f))
                                 .collect::<EvalResult<Vec<_>>>()?;
            Ok(Value::from(mapped))
        },
        Value::Map(_) => Err(RuntimeError::TypeError { details: "Cannot apply a numeric operation to an object".to_string(),
                                                       line }),
        scalar => f(scalar),
    }
}

/// Ensures a builtin received exactly `expected` arguments.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let args = vec![Value::Real(2.0), Value::Real(1.0)];
/// assert!(check_arity("atan2", &args, 2, 15).is_ok());
/// assert!(check_arity("sin", &args, 1, 15).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  found: args.len(),
                                                  line })
    }
}

/// Largest `n` for which `n!` is finite in `f64`.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Computes the gamma function Γ(z).
///
/// Positive integers are computed exactly as `(z - 1)!` so that integer
/// factorials come out exact. Everything else uses the Lanczos approximation
/// (`g = 7`, 9 terms) with the reflection formula for `z < 0.5`:
///
/// `Γ(z) = π / (sin(πz) * Γ(1 − z))`
///
/// Non-positive integers are poles and yield `Infinity`; `NaN` propagates.
///
/// # Example
/// ```
/// use calcboard::interpreter::evaluator::utils::euler_gamma;
///
/// assert_eq!(euler_gamma(5.0), 24.0);
/// assert!((euler_gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// assert_eq!(euler_gamma(0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn euler_gamma(z: f64) -> f64 {
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z.is_nan() {
        return f64::NAN;
    }
    if z.fract() == 0.0 {
        if z <= 0.0 {
            return f64::INFINITY;
        }
        if z - 1.0 > MAX_FINITE_FACTORIAL {
            return f64::INFINITY;
        }
        let mut product = 1.0;
        let mut k = 2.0;
        while k < z {
            product *= k;
            k += 1.0;
        }
        return product;
    }

    if z < 0.5 {
        return consts::PI / ((consts::PI * z).sin() * euler_gamma(1.0 - z));
    }

    let z_minus_1 = z - 1.0;
    let mut x = COEFFS[0];
    let mut offset = 1.0;
    for c in &COEFFS[1..] {
        x += c / (z_minus_1 + offset);
        offset += 1.0;
    }

    let t = z_minus_1 + G + 0.5;
    consts::TAU.sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x
}

/// Checks whether a name refers to a reserved identifier.
///
/// A reserved identifier is a builtin function name or a constant. User
/// functions and parameters may not use these names.
///
/// # Example
/// ```
/// use calcboard::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sin"));
/// assert!(is_reserved_identifier("pi"));
/// assert!(!is_reserved_identifier("my_function"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    use crate::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    BUILTIN_FUNCTIONS.contains(&name) || constant(name).is_some()
}
