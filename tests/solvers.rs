use calcboard::{
    error::{InputError, SolveError},
    input::{parse_coefficients, parse_number},
    solver::{Coefficients, Solution, solve_linear, solve_quadratic},
};

#[test]
fn linear_single_solution() {
    assert_eq!(solve_linear(2.0, 3.0, 7.0), Solution::SingleValue(2.0));
    assert_eq!(solve_linear(4.0, 0.0, 2.0), Solution::SingleValue(0.5));
    assert_eq!(solve_linear(-1.0, 5.0, 5.0), Solution::SingleValue(0.0));
}

#[test]
fn linear_degenerate_cases() {
    assert_eq!(solve_linear(0.0, 5.0, 5.0), Solution::InfiniteSolutions);
    assert_eq!(solve_linear(0.0, 0.0, 0.0), Solution::InfiniteSolutions);
    assert_eq!(solve_linear(0.0, 1.0, 2.0), Solution::NoSolution);
    assert_eq!(solve_linear(-0.0, 1.0, 1.0), Solution::InfiniteSolutions);
}

#[test]
fn quadratic_discriminant_branches() {
    assert_eq!(solve_quadratic(1.0, -3.0, 2.0), Ok(Solution::TwoRealRoots(2.0, 1.0)));
    assert_eq!(solve_quadratic(-1.0, 0.0, 4.0), Ok(Solution::TwoRealRoots(-2.0, 2.0)));
    assert_eq!(solve_quadratic(1.0, 2.0, 1.0), Ok(Solution::OneRealRoot(-1.0)));
    assert_eq!(solve_quadratic(1.0, 0.0, 1.0),
               Ok(Solution::ComplexRootPair { real: 0.0,
                                              imag: 1.0, }));
}

#[test]
fn quadratic_roots_satisfy_equation() {
    let (a, b, c) = (3.0, -7.0, -11.0);
    let Ok(Solution::TwoRealRoots(x1, x2)) = solve_quadratic(a, b, c) else {
        panic!("expected two real roots");
    };
    for x in [x1, x2] {
        assert!((a * x * x + b * x + c).abs() < 1e-9, "x = {x}");
    }
    assert!(x1 > x2, "positive square root comes first for a > 0");
}

#[test]
fn quadratic_requires_leading_coefficient() {
    assert_eq!(solve_quadratic(0.0, 1.0, 1.0), Err(SolveError::NotQuadratic));
    assert_eq!(solve_quadratic(0.0, 0.0, 0.0), Err(SolveError::NotQuadratic));
}

#[test]
fn solution_texts() {
    assert_eq!(Solution::NoSolution.to_string(), "No solution.");
    assert_eq!(Solution::InfiniteSolutions.to_string(), "Infinite solutions (any x).");
    assert_eq!(Solution::SingleValue(-1.0 / 3.0).to_string(), "x = -0.3333333333");
    assert_eq!(Solution::OneRealRoot(-0.0).to_string(), "One real root: x = 0");
    assert_eq!(Solution::TwoRealRoots(2.0_f64.sqrt(), -(2.0_f64.sqrt())).to_string(),
               "Two real roots: x1 = 1.4142135624, x2 = -1.4142135624");
    assert_eq!(Solution::ComplexRootPair { real: 0.5,
                                           imag: 1.5, }.to_string(),
               "Complex roots: x1 = 0.5 + 1.5i, x2 = 0.5 - 1.5i");
}

#[test]
fn number_fields() {
    assert_eq!(parse_number(""), Ok(0.0));
    assert_eq!(parse_number(" \t"), Ok(0.0));
    assert_eq!(parse_number("42"), Ok(42.0));
    assert_eq!(parse_number("+3"), Ok(3.0));
    assert_eq!(parse_number("5."), Ok(5.0));
    assert_eq!(parse_number("-.25"), Ok(-0.25));
    assert_eq!(parse_number("1E3"), Ok(1000.0));
    assert_eq!(parse_number("0b101"), Ok(5.0));
    assert_eq!(parse_number("0o17"), Ok(15.0));
    assert_eq!(parse_number(" 0x1F "), Ok(31.0));
}

#[test]
fn rejected_number_fields() {
    for text in ["abc", "Infinity", "-Infinity", "inf", "NaN", "1e400", "0x", "-0x10", "1,5", "2 3",
                 ".", "e5", "0b102"]
    {
        assert!(parse_number(text).is_err(), "{text:?} should be rejected");
    }
}

#[test]
fn coefficients_report_first_bad_field() {
    assert_eq!(parse_coefficients("1", " -2 ", ""), Ok(Coefficients::new(1.0, -2.0, 0.0)));
    assert_eq!(parse_coefficients("1", "x", "y"),
               Err(InputError::InvalidNumber { field: "b",
                                               text:  "x".to_string(), }));
}

#[test]
fn repeated_solving_is_stable() {
    let samples = [(2.0, 3.0, 7.0), (1.0, 0.0, 10_000_005.0), (1.0, -3.0, 2.0), (1.0, 2.0, 5.0),
                   (3.0, -7.0, -11.0), (0.0, 1.0, 1.0)];
    for (a, b, c) in samples {
        assert_eq!(solve_linear(a, b, c), solve_linear(a, b, c));
        assert_eq!(solve_quadratic(a, b, c), solve_quadratic(a, b, c));
        assert_eq!(solve_linear(a, b, c).to_string(), solve_linear(a, b, c).to_string());
    }
}

#[test]
fn tied_solutions_render_away_from_zero() {
    assert_eq!(solve_linear(1.0, 0.0, 10_000_005.0).to_string(), "x = 1.000001e+7");
    assert_eq!(solve_linear(2048.0, 0.0, 1.0).to_string(), "x = 0.0004882813");
}
