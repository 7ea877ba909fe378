use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation between two values.
///
/// Division always takes the real path, so `7 / 2` is `3.5`. The other
/// operators stay integral when both operands are integers and promote to
/// real otherwise.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Operator position for error reporting.
///
/// # Example
/// ```
/// use spi::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), 1);
/// assert_eq!(result.unwrap(), Value::Integer(7));
///
/// let result = eval_binary(BinaryOperator::Div, Value::Integer(6), Value::Integer(2), 1);
/// assert_eq!(result.unwrap(), Value::Real(3.0));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: usize)
                   -> EvalResult<Value> {
    use Value::{Integer, Real};

    match (op, left, right) {
        (BinaryOperator::Div, ..) => eval_division(left, right, position),
        (_, Integer(a), Integer(b)) => eval_integer_op(op, a, b, position),
        (_, Real(_), _) | (_, _, Real(_)) => {
            eval_real_op(op, left.as_real(), right.as_real(), position)
        },
    }
}

/// Evaluates `+`, `-` or `*` on two integers with overflow checking.
fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, position: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => return eval_division(Value::Integer(a), Value::Integer(b), position),
    };
    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { position })
}

/// Evaluates an operator on two reals, rejecting infinite or NaN results.
fn eval_real_op(op: BinaryOperator, a: f64, b: f64, position: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            a / b
        },
    };

    if result.is_finite() {
        Ok(Value::Real(result))
    } else {
        Err(RuntimeError::Overflow { position })
    }
}

/// True division on the real values of both operands.
fn eval_division(left: Value, right: Value, position: usize) -> EvalResult<Value> {
    if right.is_zero() {
        return Err(RuntimeError::DivisionByZero { position });
    }
    eval_real_op(BinaryOperator::Div, left.as_real(), right.as_real(), position)
}
