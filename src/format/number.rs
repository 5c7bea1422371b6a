/// Magnitudes below this (other than zero) are shown in scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-6;
/// Magnitudes at or above this are shown in scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e6;
/// Digits after the mantissa's decimal point in scientific notation.
pub const MANTISSA_DIGITS: usize = 6;
/// Decimal places kept in plain notation before trailing zeros are dropped.
pub const DECIMAL_PLACES: usize = 10;

/// Converts a number into the text every widget displays.
///
/// - Non-finite input yields its name: `NaN`, `Infinity` or `-Infinity`.
/// - Non-zero magnitudes below `1e-6` or from `1e6` upwards use scientific
///   notation with six mantissa digits and a signed exponent.
/// - Everything else is rounded to ten decimal places and printed as the
///   shortest decimal that reads back to the rounded value, so trailing zeros
///   and a bare decimal point never appear.
///
/// Both roundings send exact ties away from zero.
///
/// Zero, including negative zero, is always `"0"`.
///
/// # Example
/// ```
/// use calcboard::format::number::format_number;
///
/// assert_eq!(format_number(12_345_000.0), "1.234500e+7");
/// assert_eq!(format_number(0.000_000_5), "5.000000e-7");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(-2.50), "-2.5");
/// assert_eq!(format_number(10_000_005.0), "1.000001e+7");
/// assert_eq!(format_number(0.0), "0");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if magnitude != 0.0 && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        return to_exponential(n);
    }

    let rounded = round_to_places(n);
    if rounded == 0.0 {
        return "0".to_string();
    }

    format!("{rounded}")
}

/// Fractional digits that cover the exact decimal expansion of any `f64` in
/// the plain band.
const EXACT_FRACTION_DIGITS: usize = 1100;
/// Significant digits that cover the exact decimal expansion of any `f64`.
const EXACT_SIGNIFICANT_DIGITS: usize = 800;

/// Rounds to [`DECIMAL_PLACES`] with ties going away from zero.
///
/// Works on the exact decimal expansion, so `0.00048828125` becomes
/// `0.0004882813` where `{:.10}` would round the tie to even.
fn round_to_places(n: f64) -> f64 {
    let exact = format!("{:.EXACT_FRACTION_DIGITS$}", n.abs());
    let Some((int_part, fraction)) = exact.split_once('.') else {
        return n;
    };

    let keep = int_part.len() + DECIMAL_PLACES;
    let digits = round_digits(&format!("{int_part}{fraction}"), keep);
    let int_len = digits.len() - DECIMAL_PLACES;
    let text = format!("{}.{}", &digits[..int_len], &digits[int_len..]);

    let magnitude: f64 = text.parse().unwrap_or(n.abs());
    magnitude.copysign(n)
}

/// Scientific notation with [`MANTISSA_DIGITS`] fraction digits, ties away
/// from zero and an explicit exponent sign, e.g. `1.500000e+8`.
fn to_exponential(n: f64) -> String {
    let exact = format!("{:.EXACT_SIGNIFICANT_DIGITS$e}", n.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return exact;
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return exact;
    };

    let mut digits = round_digits(&mantissa.replace('.', ""), MANTISSA_DIGITS + 1);
    if digits.len() > MANTISSA_DIGITS + 1 {
        digits.truncate(MANTISSA_DIGITS + 1);
        exponent += 1;
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{}.{}e{exponent_sign}{}",
            &digits[..1],
            &digits[1..],
            exponent.unsigned_abs())
}

/// Keeps the first `keep` digits of an unsigned digit string, adding one
/// when the next digit is 5 or more. A carry out of the leading digit makes
/// the result one digit longer.
fn round_digits(digits: &str, keep: usize) -> String {
    let bytes = digits.as_bytes();
    let mut kept = bytes[..keep.min(bytes.len())].to_vec();
    kept.resize(keep, b'0');

    if bytes.get(keep).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    kept.into_iter().map(char::from).collect()
}
