use serde::{
    Serialize, Serializer,
    ser::{Error as _, SerializeMap, SerializeSeq},
};
use serde_json::value::RawValue;

use crate::{format::number::format_number, interpreter::value::core::Value};

/// Renders an evaluator result for display.
///
/// Scalars go through [`format_number`] (booleans print as `true`/`false` and
/// complex numbers as `a + bi`). Arrays become compact JSON and maps become
/// JSON indented by two spaces.
///
/// # Example
/// ```
/// use calcboard::{format::value::render_value, interpreter::value::core::Value};
///
/// let matrix = Value::from(vec![Value::from(vec![1.0.into(), 2.0.into()]),
///                               Value::from(vec![3.0.into(), 4.5.into()])]);
/// assert_eq!(render_value(&matrix), "[[1,2],[3,4.5]]");
///
/// let map = Value::map(vec![("x".into(), 1.0.into())]);
/// assert_eq!(render_value(&map), "{\n  \"x\": 1\n}");
///
/// assert_eq!(render_value(&Value::Real(2.0e7)), "2.000000e+7");
///
/// let large = Value::from(vec![1e17.into(), 1e21.into(), (-2.5e-7).into()]);
/// assert_eq!(render_value(&large), "[100000000000000000,1e+21,-2.5e-7]");
/// ```
#[must_use]
pub fn render_value(value: &Value) -> String {
    let rendered = match value {
        Value::Real(r) => return format_number(*r),
        Value::Bool(b) => return b.to_string(),
        Value::Complex(c) => return c.to_string(),
        Value::Array(_) => serde_json::to_string(value),
        Value::Map(_) => serde_json::to_string_pretty(value),
    };

    rendered.unwrap_or_else(|e| format!("<unprintable value: {e}>"))
}

/// A real number as it appears inside JSON output.
///
/// Non-finite values become `null`; everything else is written the way a
/// browser's `JSON.stringify` writes numbers.
struct JsonReal(f64);

impl Serialize for JsonReal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return serializer.serialize_unit();
        }
        RawValue::from_string(json_number(self.0)).map_err(S::Error::custom)?
                                                   .serialize(serializer)
    }
}

/// Shortest round-trip digits laid out like ECMAScript `Number::toString`:
/// plain digits for exponents in `-7..21`, otherwise `d.ddde±x`.
///
/// ```text
/// 1e17    -> 100000000000000000
/// 1e21    -> 1e+21
/// 1.5e-7  -> 1.5e-7
/// 0.00001 -> 0.00001
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn json_number(r: f64) -> String {
    if r == 0.0 {
        return "0".to_string();
    }

    let shortest = format!("{:e}", r.abs());
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((&shortest, "0"));
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, fraction) = digits.split_at(n as usize);
        format!("{int_part}.{fraction}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let point = if rest.is_empty() { "" } else { "." };
        let sign = if n - 1 < 0 { '-' } else { '+' };
        format!("{first}{point}{rest}e{sign}{}", (n - 1).unsigned_abs())
    };

    if r < 0.0 { format!("-{body}") } else { body }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Real(r) => JsonReal(*r).serialize(serializer),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Complex(c) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("re", &JsonReal(c.real))?;
                map.serialize_entry("im", &JsonReal(c.imaginary))?;
                map.end()
            },
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            },
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            },
        }
    }
}
