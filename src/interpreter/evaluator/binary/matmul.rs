use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `*` between two arrays.
    ///
    /// # Shape rules
    /// - vector * vector produces a scalar via dot product.
    /// - matrix * vector produces a vector.
    /// - vector * matrix produces a vector.
    /// - matrix * matrix produces a matrix.
    ///
    /// The inner dimensions must agree. Entries may be real or complex.
    ///
    /// # Example
    /// ```
    /// use calcboard::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let row = |a: f64, b: f64| Value::from(vec![a.into(), b.into()]);
    /// let m = Value::from(vec![row(1.0, 2.0), row(3.0, 4.0)]);
    ///
    /// // [[1, 2], [3, 4]] * [1, 2] = [5, 11]
    /// let result = Context::eval_matmul(&m, &row(1.0, 2.0), 1).unwrap();
    /// assert_eq!(result, row(5.0, 11.0));
    ///
    /// // [1, 2] * [3, 4] = 11
    /// let result = Context::eval_matmul(&row(1.0, 2.0), &row(3.0, 4.0), 1).unwrap();
    /// assert_eq!(result, Value::Real(11.0));
    /// ```
    pub fn eval_matmul(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        let lshape = shape_of(left, line)?;
        let rshape = shape_of(right, line)?;

        match (lshape.as_slice(), rshape.as_slice()) {
            ([n], [m]) if n == m => {
                dot(left.as_slice(line)?.iter(), right.as_slice(line)?.iter(), line)
            },
            ([_, k], [m]) if k == m => {
                let vector = right.as_slice(line)?;
                let out = rows(left, line)?.into_iter()
                                           .map(|row| dot(row.iter(), vector.iter(), line))
                                           .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(out))
            },
            ([n], [k, cols]) if n == k => {
                let vector = left.as_slice(line)?;
                let matrix = rows(right, line)?;
                let out = (0..*cols).map(|j| {
                                        dot(vector.iter(), matrix.iter().map(|row| &row[j]), line)
                                    })
                                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(out))
            },
            ([_, k], [m, cols]) if k == m => {
                let matrix = rows(right, line)?;
                let out = rows(left, line)?.into_iter()
                                           .map(|row| {
                                               let cells =
                                                   (0..*cols).map(|j| {
                                                                 dot(row.iter(),
                                                                     matrix.iter()
                                                                           .map(|r| &r[j]),
                                                                     line)
                                                             })
                                                             .collect::<EvalResult<Vec<_>>>()?;
                                               Ok(Value::from(cells))
                                           })
                                           .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(out))
            },
            _ => Err(RuntimeError::DimensionMismatch { details: format!("cannot multiply size {lshape:?} by size {rshape:?}"),
                                                       line }),
        }
    }
}

/// Computes the shape of a value.
///
/// Scalars have shape `[]`. Arrays are treated as tensors, and their shape is
/// determined recursively. All elements must have the same shape; ragged
/// arrays are rejected.
///
/// # Example
/// ```
/// use calcboard::interpreter::{evaluator::binary::matmul::shape_of, value::core::Value};
///
/// let row = Value::from(vec![1.0.into(), 2.0.into(), 3.0.into()]);
/// let matrix = Value::from(vec![row.clone(), row]);
///
/// assert_eq!(shape_of(&matrix, 1).unwrap(), vec![2, 3]);
/// assert_eq!(shape_of(&Value::Real(1.0), 1).unwrap(), Vec::<usize>::new());
/// ```
pub fn shape_of(value: &Value, line: usize) -> EvalResult<Vec<usize>> {
    match value {
        Value::Array(elements) => {
            let Some((first, rest)) = elements.split_first() else {
                return Ok(vec![0]);
            };
            let inner = shape_of(first, line)?;
            for element in rest {
                if shape_of(element, line)? != inner {
                    return Err(RuntimeError::DimensionMismatch { details: "rows have different sizes".to_string(),
                                                                 line });
                }
            }
            let mut shape = vec![elements.len()];
            shape.extend(inner);
            Ok(shape)
        },
        _ => Ok(Vec::new()),
    }
}

/// Borrows the rows of a matrix.
fn rows(matrix: &Value, line: usize) -> EvalResult<Vec<&[Value]>> {
    matrix.as_slice(line)?
          .iter()
          .map(|row| row.as_slice(line))
          .collect()
}

/// Sums the products of paired entries.
fn dot<'a>(left: impl Iterator<Item = &'a Value>,
           right: impl Iterator<Item = &'a Value>,
           line: usize)
           -> EvalResult<Value> {
    left.zip(right).try_fold(Value::Real(0.0), |acc, (l, r)| {
                       let product = Context::eval_scalar_op(BinaryOperator::Mul, l, r, line)?;
                       Context::eval_scalar_op(BinaryOperator::Add, &acc, &product, line)
                   })
}
