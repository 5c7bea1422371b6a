use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{evaluator::function::core::validate_function_name, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Parameter bindings of the user-defined function currently being called.
pub type Bindings = HashMap<String, Value>;

/// Deepest chain of nested user-defined function calls before evaluation is
/// aborted.
pub const MAX_CALL_DEPTH: usize = 256;

/// Deepest recursion of [`Context::eval`], counting sub-expressions inside
/// user-defined function bodies across calls.
pub const MAX_EVAL_DEPTH: usize = 300;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: variables assigned so far and
/// all user-defined functions. A context lives for one evaluation of an
/// expression text; nothing carries over between evaluations.
#[derive(Debug, Default)]
pub struct Context {
    /// Variables bound by `name = expr` statements.
    pub variables:  HashMap<String, Value>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated when declaring functions like `square(x) = x * x`.
    pub functions:  HashMap<String, FunctionDef>,
    /// Current nesting of user-defined function calls.
    pub call_depth: usize,
    /// Current recursion of `eval`.
    pub eval_depth: usize,
}

impl Context {
    /// Creates a new evaluation context with no variables and no
    /// user-defined functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. `bindings`
    /// holds parameter values while a user-defined function body is being
    /// evaluated and shadow every other name.
    ///
    /// # Example
    /// ```
    /// use calcboard::{ast::Expr,
    ///                 interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// let mut ctx = Context::new();
    /// let expr = Expr::Variable { name: "tau".into(),
    ///                             line: 1, };
    ///
    /// assert_eq!(ctx.eval(&expr, None).unwrap(),
    ///            Value::Real(std::f64::consts::TAU));
    /// ```
    pub fn eval(&mut self, expr: &Expr, bindings: Option<&Bindings>) -> EvalResult<Value> {
        if self.eval_depth >= MAX_EVAL_DEPTH {
            return Err(RuntimeError::NestingTooDeep { line: expr.line_number() });
        }
        self.eval_depth += 1;
        let result = self.eval_node(expr, bindings);
        self.eval_depth -= 1;
        result
    }

    fn eval_node(&mut self, expr: &Expr, bindings: Option<&Bindings>) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line, bindings),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr, bindings)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line, bindings),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                let arg_vals = arguments.iter()
                                        .map(|arg| self.eval(arg, bindings))
                                        .collect::<EvalResult<Vec<_>>>()?;
                self.eval_function(name, arg_vals, *line)
            },
            Expr::Abs { expr, line } => {
                let value = self.eval(expr, bindings)?;
                Self::eval_abs(&value, *line)
            },
            Expr::ArrayLiteral { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element, bindings))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
            Expr::MapLiteral { entries, .. } => {
                let values = entries.iter()
                                    .map(|(key, value)| {
                                        self.eval(value, bindings).map(|v| (key.clone(), v))
                                    })
                                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::map(values))
            },
            Expr::Index { target,
                          indices,
                          line, } => {
                let target = self.eval(target, bindings)?;
                let indices = indices.iter()
                                     .map(|index| self.eval(index, bindings))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Self::eval_index(&target, &indices, *line)
            },
        }
    }

    /// Evaluates both operands and applies the operator.
    ///
    /// `and` and `or` short-circuit: the right operand is not evaluated when
    /// the left one already decides the result.
    fn eval_binary_op(&mut self,
                      left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      line: usize,
                      bindings: Option<&Bindings>)
                      -> EvalResult<Value> {
        let left = self.eval(left, bindings)?;

        if matches!(op, BinaryOperator::And | BinaryOperator::Or)
           && let Value::Bool(_) | Value::Real(_) = left
        {
            let decided = left.as_bool(line)?;
            if (op == BinaryOperator::And) != decided {
                return Ok(Value::Bool(decided));
            }
        }

        let right = self.eval(right, bindings)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments bind the variable and yield the assigned value; function
    /// definitions register the function and yield nothing.
    ///
    /// # Errors
    /// `ReservedRedefinition` when a builtin function or constant would be
    /// shadowed, plus any error raised while evaluating the statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Function(def) => {
                validate_function_name(&def.name, def.line)?;
                trace!(name = %def.name, params = def.params.len(), "defining function");
                self.functions.insert(def.name.clone(), def.clone());
                Ok(None)
            },
            Statement::Assignment { name, value, line } => {
                if Self::is_reserved_variable(name) {
                    return Err(RuntimeError::ReservedRedefinition { name: name.clone(),
                                                                    line: *line, });
                }
                let value = self.eval(value, None)?;
                trace!(%name, "assigning variable");
                self.variables.insert(name.clone(), value.clone());
                Ok(Some(value))
            },
            Statement::Expression { expr, .. } => self.eval(expr, None).map(Some),
        }
    }

    /// Evaluates a program and returns the value of its last statement.
    ///
    /// # Errors
    /// `NoValue` when the last statement is a function definition.
    ///
    /// # Example
    /// ```
    /// use calcboard::{interpreter::{evaluator::core::Context,
    ///                               lexer::tokenize,
    ///                               parser::statement::parse_program,
    ///                               value::core::Value}};
    ///
    /// let tokens = tokenize("sq(x) = x * x\nr = 3\nsq(r) + 1").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    ///
    /// assert_eq!(Context::new().eval_program(&program).unwrap(), Value::Real(10.0));
    /// ```
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        let mut last = None;
        let mut last_line = 1;

        for statement in statements {
            last_line = match statement {
                Statement::Function(def) => def.line,
                Statement::Expression { line, .. } | Statement::Assignment { line, .. } => *line,
            };
            last = self.eval_statement(statement)?;
        }

        last.ok_or(RuntimeError::NoValue { line: last_line })
    }
}
