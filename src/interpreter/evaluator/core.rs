use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// The walk is post-order: for a binary operation the left operand is
/// evaluated before the right one, then both are combined. Recursion depth
/// equals the depth of the tree.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` when a `/` has a zero right operand.
/// - `RuntimeError::Overflow` when a result leaves the representable range.
///
/// # Example
/// ```
/// use spi::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::evaluate, value::core::Value},
/// };
///
/// let seven = Expr::Literal { value:    7,
///                             position: 0, };
/// let two = Expr::Literal { value:    2,
///                           position: 4, };
/// let tree = Expr::binary(seven, BinaryOperator::Div, two, 2);
///
/// assert_eq!(evaluate(&tree).unwrap(), Value::Real(3.5));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::Integer(*value)),
        Expr::BinaryOp { left, op, right, .. } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, expr.position())
        },
    }
}
