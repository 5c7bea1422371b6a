use crate::{
    interpreter::{
        evaluator::{
            binary::scalar::to_number,
            core::{Context, EvalResult},
        },
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::MAX_SAFE_INTEGER,
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Real bases with real exponents use `powf`, except that a negative base
    /// raised to a fractional exponent has no real result and is computed in
    /// the complex plane instead. Complex bases with integral exponents use
    /// repeated squaring; everything else uses the polar form.
    ///
    /// # Example
    /// ```
    /// use calcboard::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&2.0.into(), &10.0.into(), 1).unwrap();
    /// assert_eq!(result, Value::Real(1024.0));
    ///
    /// let root = Context::eval_pow(&(-4.0).into(), &0.5.into(), 1).unwrap();
    /// assert!(root.is_complex());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        let base = to_number(base, line)?;
        let exponent = to_number(exponent, line)?;

        match (&base, &exponent) {
            (Value::Real(b), Value::Real(e)) => {
                if *b < 0.0 && e.is_finite() && e.fract() != 0.0 {
                    Ok(Value::Complex(ComplexNumber::from(*b).powf(*e)))
                } else {
                    Ok(Value::Real(b.powf(*e)))
                }
            },
            (Value::Complex(b), Value::Real(e)) => {
                if e.fract() == 0.0 && e.abs() <= MAX_SAFE_INTEGER {
                    Ok(Value::Complex(b.checked_powi(*e as i64, line)?))
                } else {
                    Ok(Value::Complex(b.powf(*e)))
                }
            },
            _ => {
                let b = base.as_complex(line)?;
                let e = exponent.as_complex(line)?;
                Ok(Value::Complex(b.powc(e)))
            },
        }
    }
}
