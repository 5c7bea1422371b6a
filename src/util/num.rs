use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Safely converts an `f64` to `usize` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Errors
/// Returns an error for non-finite, negative, out-of-range, or fractional
/// values.
///
/// # Example
/// ```
/// use calcboard::{error::RuntimeError, util::num::f64_to_usize_checked};
///
/// assert_eq!(f64_to_usize_checked(7.0, 9).unwrap(), 7);
///
/// let err = f64_to_usize_checked(1.5, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::RealIsFractional { line: 11 }));
///
/// let err = f64_to_usize_checked(-5.0, 10).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { line: 10, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_usize_checked(value: f64, line: usize) -> EvalResult<usize> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is not a finite integer"),
                                                   line });
    }
    if value < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is negative"),
                                                   line });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::RealIsFractional { line });
    }
    if value > MAX_SAFE_INTEGER {
        return Err(RuntimeError::ValueTooLarge { line });
    }
    usize::try_from(value as u64).map_err(|_| RuntimeError::ValueTooLarge { line })
}

/// Converts a `usize` to `f64`, failing when the count is beyond the exactly
/// representable range.
///
/// # Example
/// ```
/// use calcboard::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(100, 0).unwrap(), 100.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    let as_float = value as f64;
    if as_float > MAX_SAFE_INTEGER {
        return Err(RuntimeError::ValueTooLarge { line });
    }
    Ok(as_float)
}
