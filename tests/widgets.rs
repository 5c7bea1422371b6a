use calcboard::{
    error::{EvalError, RuntimeError},
    interpreter::{ExpressionEvaluator, MathEvaluator, value::core::Value},
    widget::{WidgetOutput, run_expression, run_linear, run_quadratic},
};

/// Records what it was asked and answers from a script.
struct Scripted {
    seen:   Vec<String>,
    answer: Result<Value, EvalError>,
}

impl ExpressionEvaluator for Scripted {
    fn evaluate(&mut self, expression: &str) -> Result<Value, EvalError> {
        self.seen.push(expression.to_string());
        self.answer.clone()
    }
}

#[test]
fn expression_input_is_trimmed_before_evaluation() {
    let mut evaluator = Scripted { seen:   Vec::new(),
                                   answer: Ok(Value::Real(1.5)), };
    let output = run_expression(&mut evaluator, "  1 + 0.5 \n");

    assert_eq!(output, WidgetOutput::ok("1.5"));
    assert_eq!(evaluator.seen, vec!["1 + 0.5".to_string()]);
}

#[test]
fn empty_expression_is_advisory_without_evaluating() {
    let mut evaluator = Scripted { seen:   Vec::new(),
                                   answer: Ok(Value::Real(0.0)), };
    let output = run_expression(&mut evaluator, "   ");

    assert_eq!(output.text, "Please enter an expression.");
    assert!(!output.is_error);
    assert!(evaluator.seen.is_empty());
}

#[test]
fn evaluator_failure_is_prefixed() {
    let mut evaluator = Scripted { seen:   Vec::new(),
                                   answer: Err(RuntimeError::DivisionByZero { line: 1 }.into()), };
    let output = run_expression(&mut evaluator, "1 / 0i");

    assert_eq!(output, WidgetOutput::error("Error: Division by zero (line 1)"));
}

#[test]
fn builtin_evaluator_renders_values() {
    assert_eq!(run_expression(&mut MathEvaluator, "3 > 2").text, "true");
    assert_eq!(run_expression(&mut MathEvaluator, "[1, 2] * 0.5").text, "[0.5,1]");
    assert_eq!(run_expression(&mut MathEvaluator, "1e-7").text, "1.000000e-7");
    assert_eq!(run_expression(&mut MathEvaluator, "[1e17, 1e21]").text,
               "[100000000000000000,1e+21]");
}

#[test]
fn deeply_nested_input_is_an_error() {
    let source = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
    assert_eq!(run_expression(&mut MathEvaluator, &source),
               WidgetOutput::error("Error: Expression is nested too deeply (line 1)"));
}

#[test]
fn linear_widget_texts() {
    assert_eq!(run_linear("2", "3", "7"), WidgetOutput::ok("x = 2"));
    assert_eq!(run_linear("3", "1", "0"), WidgetOutput::ok("x = -0.3333333333"));
    assert_eq!(run_linear("0", "1", "2"), WidgetOutput::ok("No solution."));
    assert_eq!(run_linear("", "", ""), WidgetOutput::ok("Infinite solutions (any x)."));
    assert_eq!(run_linear("1", "0", "10000005"), WidgetOutput::ok("x = 1.000001e+7"));
}

#[test]
fn quadratic_widget_texts() {
    assert_eq!(run_quadratic("1", "-3", "2").text, "Two real roots: x1 = 2, x2 = 1");
    assert_eq!(run_quadratic("1", "2", "1").text, "One real root: x = -1");
    assert_eq!(run_quadratic("1", "2", "5").text, "Complex roots: x1 = -1 + 2i, x2 = -1 - 2i");
    assert_eq!(run_quadratic("0x1", "0", "-4").text, "Two real roots: x1 = 2, x2 = -2");
}

#[test]
fn degenerate_quadratic_is_error() {
    assert_eq!(run_quadratic("0", "2", "1"),
               WidgetOutput::error("This is not quadratic (a must be nonzero). Use the linear solver."));
}

#[test]
fn invalid_coefficients_are_errors() {
    let expected = WidgetOutput::error("Please enter valid numbers for a, b, and c.");
    assert_eq!(run_linear("1", "Infinity", "2"), expected);
    assert_eq!(run_quadratic("abc", "1", "2"), expected);
    assert_eq!(run_quadratic("1", "1", "1e999"), expected);
}
