use tracing::trace;

use crate::{error::InputError, solver::Coefficients};

/// Parses a coefficient text field into a finite number.
///
/// Surrounding whitespace is ignored and a blank field reads as `0`. Accepted
/// forms are decimal literals with an optional sign, fraction and exponent,
/// and unsigned `0x`, `0o` or `0b` integer literals. Everything else is
/// rejected, as is any literal whose value is not finite.
///
/// # Errors
/// [`InputError::InvalidNumber`] naming the field as `"value"`; use
/// [`parse_coefficients`] to get per-field names.
///
/// # Example
/// ```
/// use calcboard::input::parse_number;
///
/// assert_eq!(parse_number("  ").unwrap(), 0.0);
/// assert_eq!(parse_number("-2.5e3").unwrap(), -2500.0);
/// assert_eq!(parse_number(" 0x1F ").unwrap(), 31.0);
/// assert_eq!(parse_number(".5").unwrap(), 0.5);
/// assert!(parse_number("abc").is_err());
/// assert!(parse_number("Infinity").is_err());
/// assert!(parse_number("1e400").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f64, InputError> {
    parse_field("value", text)
}

/// Parses the three coefficient fields of a solver widget.
///
/// # Errors
/// [`InputError::InvalidNumber`] for the first of `a`, `b`, `c` that is not a
/// finite number.
pub fn parse_coefficients(a: &str, b: &str, c: &str) -> Result<Coefficients, InputError> {
    Ok(Coefficients::new(parse_field("a", a)?, parse_field("b", b)?, parse_field("c", c)?))
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let invalid = || InputError::InvalidNumber { field,
                                                 text: trimmed.to_string() };

    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value = parse_radix_literal(trimmed).or_else(|| parse_decimal(trimmed))
                                            .ok_or_else(invalid)?;

    if !value.is_finite() {
        return Err(invalid());
    }
    trace!(field, text = trimmed, value, "parsed coefficient");
    Ok(value)
}

/// `0x`, `0o` and `0b` literals; no sign, no fraction, at least one digit.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let (prefix, digits) = text.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars()
          .try_fold(0.0_f64, |acc, ch| ch.to_digit(radix).map(|d| acc.mul_add(f64::from(radix), f64::from(d))))
}

/// Decimal literals only; keeps `inf`, `nan` and friends out of the
/// standard float parser.
fn parse_decimal(text: &str) -> Option<f64> {
    let allowed = |ch: char| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-');
    if !text.chars().all(allowed) || !text.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
