use tracing::debug;

use crate::{
    ast::{Expression, Operator},
    error::EvalError,
};

/// Result type used by every evaluation stage.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing why the line was rejected.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a parsed expression.
///
/// Addition, subtraction and multiplication follow native `f64` semantics,
/// so results that overflow become infinite rather than failing. Division by
/// zero (including `-0.0`) is checked explicitly and reported as an error
/// instead of producing infinity or NaN.
///
/// # Parameters
/// - `expression`: The expression to evaluate.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` when dividing by zero.
///
/// # Example
/// ```
/// use calcline::{
///     ast::{Expression, Operator},
///     error::EvalError,
///     interpreter::evaluator::eval_expression,
/// };
///
/// let expr = Expression { left:     1.5,
///                         operator: Operator::Mul,
///                         right:    2.0, };
/// assert_eq!(eval_expression(&expr).unwrap(), 3.0);
///
/// let expr = Expression { left:     1.0,
///                         operator: Operator::Div,
///                         right:    0.0, };
/// assert_eq!(eval_expression(&expr), Err(EvalError::DivisionByZero));
/// ```
pub fn eval_expression(expression: &Expression) -> EvalResult<f64> {
    let Expression { left,
                     operator,
                     right, } = *expression;

    let value = match operator {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                debug!(left, "rejected division by zero");
                return Err(EvalError::DivisionByZero);
            }
            left / right
        },
    };

    debug!(left, %operator, right, value, "evaluated expression");
    Ok(value)
}
