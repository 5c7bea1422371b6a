use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, MAX_CALL_DEPTH},
            function::{aggregate, elementary, log, parts, rounding, special, sqrt},
            utils::is_reserved_identifier,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// The argument count has already been checked against its [`Arity`].
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin is variadic with `n` required arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"       => { arity: Arity::Exact(1), func: Context::eval_abs_builtin },
    "sqrt"      => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "cbrt"      => { arity: Arity::Exact(1), func: sqrt::cbrt },
    "nthRoot"   => { arity: Arity::OneOf(&[1, 2]), func: sqrt::nth_root },
    "exp"       => { arity: Arity::Exact(1), func: elementary::exp },
    "log"       => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "log10"     => { arity: Arity::Exact(1), func: log::log10 },
    "log2"      => { arity: Arity::Exact(1), func: log::log2 },
    "sin"       => { arity: Arity::Exact(1), func: elementary::sin },
    "cos"       => { arity: Arity::Exact(1), func: elementary::cos },
    "tan"       => { arity: Arity::Exact(1), func: elementary::tan },
    "asin"      => { arity: Arity::Exact(1), func: elementary::asin },
    "acos"      => { arity: Arity::Exact(1), func: elementary::acos },
    "atan"      => { arity: Arity::Exact(1), func: elementary::atan },
    "atan2"     => { arity: Arity::Exact(2), func: elementary::atan2 },
    "sinh"      => { arity: Arity::Exact(1), func: elementary::sinh },
    "cosh"      => { arity: Arity::Exact(1), func: elementary::cosh },
    "tanh"      => { arity: Arity::Exact(1), func: elementary::tanh },
    "floor"     => { arity: Arity::Exact(1), func: |args, line| rounding::round_with("floor", args, line) },
    "ceil"      => { arity: Arity::Exact(1), func: |args, line| rounding::round_with("ceil", args, line) },
    "round"     => { arity: Arity::OneOf(&[1, 2]), func: |args, line| rounding::round_with("round", args, line) },
    "sign"      => { arity: Arity::Exact(1), func: rounding::sign },
    "min"       => { arity: Arity::AtLeast(1), func: |args, line| aggregate::min_max("min", args, line) },
    "max"       => { arity: Arity::AtLeast(1), func: |args, line| aggregate::min_max("max", args, line) },
    "sum"       => { arity: Arity::AtLeast(0), func: aggregate::sum },
    "mean"      => { arity: Arity::AtLeast(1), func: aggregate::mean },
    "prod"      => { arity: Arity::AtLeast(0), func: aggregate::prod },
    "size"      => { arity: Arity::Exact(1), func: aggregate::size },
    "re"        => { arity: Arity::Exact(1), func: parts::re },
    "im"        => { arity: Arity::Exact(1), func: parts::im },
    "conj"      => { arity: Arity::Exact(1), func: parts::conj },
    "arg"       => { arity: Arity::Exact(1), func: parts::arg },
    "gamma"     => { arity: Arity::Exact(1), func: special::gamma },
    "factorial" => { arity: Arity::Exact(1), func: special::factorial },
    "hypot"     => { arity: Arity::AtLeast(1), func: special::hypot },
    "pow"       => { arity: Arity::Exact(2), func: special::pow },
    "mod"       => { arity: Arity::Exact(2), func: special::modulo },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it verifies arity and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Example
    /// ```
    /// use calcboard::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// let v = ctx.eval_function("max", vec![Value::Real(2.0), Value::Real(7.0)], 1).unwrap();
    /// assert_eq!(v, Value::Real(7.0));
    ///
    /// assert!(ctx.eval_function("sin", vec![], 1).is_err());
    /// assert!(ctx.eval_function("nope", vec![], 1).is_err());
    /// ```
    pub fn eval_function(&mut self,
                         name: &str,
                         arg_vals: Vec<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(arg_vals.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 found: arg_vals.len(),
                                                                 line });
            }
            return (builtin.func)(&arg_vals, line);
        }

        self.call_user_defined_function(name, arg_vals, line)
    }

    /// Executes a user-defined function.
    ///
    /// Its parameter count must match the number of supplied arguments.
    /// Parameter bindings are created and the function body is evaluated with
    /// them; the body sees program variables but not the caller's parameters.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Calls nested deeper than [`MAX_CALL_DEPTH`].
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  arg_vals: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                      line })?;

        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             found: arg_vals.len(),
                                                             line });
        }
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { name: name.to_string(),
                                                      line });
        }

        let bindings = func.params
                           .iter()
                           .cloned()
                           .zip(arg_vals)
                           .collect::<HashMap<_, _>>();

        trace!(%name, depth = self.call_depth, "calling user function");
        self.call_depth += 1;
        let result = self.eval(&func.body, Some(&bindings));
        self.call_depth -= 1;

        result
    }

    /// `abs(x)`, sharing the implementation of `|x|`.
    fn eval_abs_builtin(args: &[Value], line: usize) -> EvalResult<Value> {
        let [value] = args else {
            return Err(RuntimeError::ArgumentCountMismatch { name: "abs".to_string(),
                                                             found: args.len(),
                                                             line });
        };
        Self::eval_abs(value, line)
    }
}

/// Ensures that a user-defined function name is valid.
///
/// A function name is rejected if it is a builtin function or a constant.
/// Redefining an earlier user function replaces it.
///
/// # Example
/// ```
/// use calcboard::interpreter::evaluator::function::core::validate_function_name;
///
/// assert!(validate_function_name("f", 1).is_ok());
/// assert!(validate_function_name("sqrt", 1).is_err());
/// assert!(validate_function_name("pi", 1).is_err());
/// ```
pub fn validate_function_name(name: &str, line: usize) -> EvalResult<()> {
    if is_reserved_identifier(name) {
        return Err(RuntimeError::ReservedRedefinition { name: name.to_string(),
                                                        line });
    }
    Ok(())
}

/// Extracts the single argument of a unary builtin.
///
/// # Errors
/// `ArgumentCountMismatch` unless exactly one argument was supplied.
pub(in crate::interpreter::evaluator) fn single_arg<'a>(name: &str,
                                                        args: &'a [Value],
                                                        line: usize)
                                                        -> EvalResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                       found: args.len(),
                                                       line }),
    }
}
