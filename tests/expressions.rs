use std::fs;

use calcboard::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
    format::render_value,
    interpreter::MathEvaluator,
    widget::run_expression,
};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_examples(&content) {
            count += 1;
            let output = run_expression(&mut MathEvaluator, &input);
            assert_eq!(output.text, expected, "example `{input}` in {path:?}");
        }
    }

    assert!(count > 0, "No calcboard examples found in docs/src");
}

/// Collects `input => expected` lines from fenced `calcboard` blocks.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```calcboard") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((input, expected)) = trimmed.split_once(" => ") {
            examples.push((input.to_string(), expected.to_string()));
        }
    }

    examples
}

fn assert_renders(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(value) => assert_eq!(render_value(&value), expected, "source: {src}"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(EvalError::Runtime(e)) => e,
        other => panic!("`{src}` should fail at runtime, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(EvalError::Parse(e)) => e,
        other => panic!("`{src}` should fail to parse, got {other:?}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_renders("1 + 2 * 3 - 4 / 2", "5");
    assert_renders("2 * 3 ^ 2", "18");
    assert_renders("(2 * 3) ^ 2", "36");
    assert_renders("2 ^ -1", "0.5");
    assert_renders("10 - 4 - 3", "3");
    assert_renders("3! + 1", "7");
    assert_renders("1 < 2 == true", "true");
}

#[test]
fn booleans_coerce_in_arithmetic() {
    assert_renders("true + true", "2");
    assert_renders("not 0", "true");
    assert_renders("false or 3 > 2", "true");
}

#[test]
fn complex_promotion() {
    assert_renders("sqrt(-9) + 1", "1 + 3i");
    assert_renders("(-8) ^ (1 / 3)", "1 + 1.7320508076i");
    assert_renders("log(-1)", "3.1415926536i");
    assert_renders("re(2 - 5i) + im(2 - 5i)", "-3");
    assert_renders("2i / i", "2");
}

#[test]
fn statements_share_variables() {
    assert_renders("a = 2\nb = a ^ 3\nb + a", "10");
    assert_renders("r = 2; area(r) = pi * r ^ 2; area(1)", "3.1415926536");
    assert_renders("sum = 3; sum + 1", "4");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_renders("# setup\nx = 5\n\n# result\nx * 2", "10");
}

#[test]
fn arrays_and_maps_render_as_json() {
    assert_renders("[1, [2, 3.5]]", "[1,[2,3.5]]");
    assert_renders("[1, 0] / 0", "[null,null]");
    assert_renders("{a: 1, \"b\": [1, 2]}",
                   "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
    assert_renders("{z: 1 + 2i}", "{\n  \"z\": {\n    \"re\": 1,\n    \"im\": 2\n  }\n}");
}

#[test]
fn matrix_vector_products() {
    assert_renders("[[1, 2], [3, 4]] * [1, 1]", "[3,7]");
    assert_renders("[1, 1] * [[1, 2], [3, 4]]", "[4,6]");
}

#[test]
fn each_evaluation_starts_fresh() {
    assert!(evaluate("x = 1").is_ok());
    assert!(matches!(runtime_error("x"), RuntimeError::UndefinedSymbol { .. }));
}

#[test]
fn runtime_failures() {
    assert!(matches!(runtime_error("[1, 2] + [1, 2, 3]"), RuntimeError::DimensionMismatch { .. }));
    assert!(matches!(runtime_error("[1, 2][3]"),
                     RuntimeError::IndexOutOfBounds { found: 3, max: 2, .. }));
    assert!(matches!(runtime_error("(1 + i) < 2"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("(1 + i) / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("(-1)!"), RuntimeError::InvalidArgument { .. }));
    assert!(matches!(runtime_error("sin(1, 2)"), RuntimeError::ArgumentCountMismatch { .. }));
    assert!(matches!(runtime_error("f(x) = x; f(1, 2)"),
                     RuntimeError::ArgumentCountMismatch { .. }));
    assert!(matches!(runtime_error("f(x) = f(x); f(1)"), RuntimeError::RecursionLimit { .. }));
    assert!(matches!(runtime_error("f(x) = x"), RuntimeError::NoValue { .. }));
}

#[test]
fn builtins_and_constants_are_reserved() {
    assert_eq!(runtime_error("pi = 3").to_string(), "Cannot redefine built-in 'pi' (line 1)");
    assert_eq!(runtime_error("sin(x) = x").to_string(),
               "Cannot redefine built-in 'sin' (line 1)");
    assert!(matches!(parse_error("f(pi) = pi"), ParseError::IdentifierReserved { .. }));
}

#[test]
fn syntax_errors_report_lines() {
    assert_eq!(parse_error("x = 1\ny +").to_string(), "Unexpected end of expression (line 2)");
    assert!(matches!(parse_error("(1 + 2"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_error("[1, 2"), ParseError::ExpectedClosingBracket { .. }));
    assert!(matches!(parse_error("|3"), ParseError::ExpectedPipe { .. }));
    assert!(matches!(parse_error("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("2 $ 3"), ParseError::InvalidCharacter { .. }));
    assert!(matches!(parse_error(""), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn moderate_nesting_evaluates() {
    let parens = format!("{}2{}", "(".repeat(50), ")".repeat(50));
    assert_renders(&parens, "2");
    assert_renders(&format!("{}3", "-".repeat(40)), "3");
    assert_renders(&format!("1{}", " + 1".repeat(99)), "100");
    assert_renders(&format!("3{}", "!".repeat(2)), "720");
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let parens = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
    assert!(matches!(parse_error(&parens), ParseError::NestingTooDeep { line: 1 }));
    assert_eq!(parse_error(&parens).to_string(), "Expression is nested too deeply (line 1)");

    let negations = format!("{}1", "-".repeat(100_000));
    assert!(matches!(parse_error(&negations), ParseError::NestingTooDeep { .. }));

    let chain = format!("1{}", " + 1".repeat(5000));
    assert!(matches!(parse_error(&chain), ParseError::NestingTooDeep { .. }));

    let factorials = format!("5{}", "!".repeat(5000));
    assert!(matches!(parse_error(&factorials), ParseError::NestingTooDeep { .. }));

    let brackets = format!("{}1{}", "[".repeat(3000), "]".repeat(3000));
    assert!(matches!(parse_error(&brackets), ParseError::NestingTooDeep { .. }));
}

#[test]
fn deep_recursion_through_nested_bodies_is_a_runtime_error() {
    let body = format!("{}f(x){}", "-(".repeat(40), ")".repeat(40));
    let src = format!("f(x) = {body}; f(1)");
    assert!(matches!(runtime_error(&src), RuntimeError::NestingTooDeep { .. }));
}
