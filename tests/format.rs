use calcboard::{
    format::{format_number, render_value},
    interpreter::value::core::Value,
};

#[test]
fn non_finite_names() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn plain_notation() {
    assert_eq!(format_number(42.0), "42");
    assert_eq!(format_number(-7.25), "-7.25");
    assert_eq!(format_number(123.456), "123.456");
    assert_eq!(format_number(999_999.5), "999999.5");
    assert_eq!(format_number(0.000_001), "0.000001");
    assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
}

#[test]
fn zero_has_no_sign() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn scientific_notation() {
    assert_eq!(format_number(1e6), "1.000000e+6");
    assert_eq!(format_number(-2.5e8), "-2.500000e+8");
    assert_eq!(format_number(1.234_567_89e-7), "1.234568e-7");
    assert_eq!(format_number(6.02e23), "6.020000e+23");
}

#[test]
fn plain_band_reads_back() {
    let mut n: f64 = 1e-6;
    while n < 1e6 {
        for value in [n, -n, n * 1.234_567_891_234, n / 7.0] {
            if value.abs() >= 1e6 {
                continue;
            }
            let text = format_number(value);
            let parsed: f64 = text.parse().unwrap_or_else(|e| panic!("{text}: {e}"));
            assert!((parsed - value).abs() <= 1e-10 * value.abs().max(1.0),
                    "{value} rendered as {text}");
        }
        n *= 3.7;
    }
}

#[test]
fn scientific_band_has_six_mantissa_digits() {
    for value in [1e6, 7.5e-7, -3.3e15, 1e-300, f64::MAX] {
        let text = format_number(value);
        let (mantissa, exponent) = text.split_once('e').unwrap();
        let fraction = mantissa.split_once('.').unwrap().1;
        assert_eq!(fraction.len(), 6, "{text}");
        assert!(exponent.starts_with('+') || exponent.starts_with('-'), "{text}");
    }
}

#[test]
fn exact_ties_round_away_from_zero() {
    // Both values sit exactly halfway between two candidates.
    assert_eq!(format_number(2.0_f64.powi(-11)), "0.0004882813");
    assert_eq!(format_number(-(2.0_f64.powi(-11))), "-0.0004882813");
    assert_eq!(format_number(10_000_005.0), "1.000001e+7");
    assert_eq!(format_number(10_000_015.0), "1.000002e+7");
    assert_eq!(format_number(-10_000_005.0), "-1.000001e+7");
    assert_eq!(format_number(9_999_995.0), "1.000000e+7");
}

#[test]
fn decimals_below_the_rounding_digit_are_kept() {
    // 0.1 is stored just above one tenth, far from any tie.
    assert_eq!(format_number(0.1), "0.1");
    assert_eq!(format_number(0.125), "0.125");
    assert_eq!(format_number(2.5e-7), "2.500000e-7");
}

#[test]
fn repeated_formatting_is_stable() {
    for n in [2.0_f64.powi(-11), 10_000_005.0, 1.0 / 3.0, -4.5e9, 7.0, f64::NAN] {
        assert_eq!(format_number(n), format_number(n), "{n}");
    }
}

#[test]
fn numbers_inside_json_use_script_layout() {
    let reals = |values: &[f64]| {
        Value::from(values.iter().map(|&r| Value::Real(r)).collect::<Vec<_>>())
    };

    assert_eq!(render_value(&reals(&[1e17, 1e21, 1.5e300])),
               "[100000000000000000,1e+21,1.5e+300]");
    assert_eq!(render_value(&reals(&[0.000_001, 1e-7, -2.5e-7])), "[0.000001,1e-7,-2.5e-7]");
    assert_eq!(render_value(&reals(&[-0.0, 0.1, 123.456, 9_007_199_254_740_993.0])),
               "[0,0.1,123.456,9007199254740992]");
    assert_eq!(render_value(&reals(&[f64::NAN, f64::INFINITY])), "[null,null]");
}
