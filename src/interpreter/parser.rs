use tracing::debug;

use crate::{
    ast::{Expression, Operator, Side},
    error::EvalError,
    interpreter::{evaluator::EvalResult, lexer::tokenize},
};

/// Number of tokens in a well-formed expression.
pub const EXPRESSION_TOKENS: usize = 3;

/// Parses one line into an [`Expression`].
///
/// The line is split into whitespace-delimited tokens, which must be exactly
/// `<left> <operator> <right>`. The operands are parsed before the operator
/// symbol is resolved, left before right, so a line with several problems
/// reports the first of them in that order.
///
/// Grammar: `expression := number operator number`
///
/// # Parameters
/// - `line`: One line of input, without its line terminator.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `InvalidFormat` if the line does not contain exactly three tokens.
/// - `InvalidOperand` if either operand is not a number.
/// - `UnknownOperator` if the middle token is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use calcline::{
///     ast::{Expression, Operator},
///     interpreter::parser::parse_expression,
/// };
///
/// let expr = parse_expression("  10   /  4 ").unwrap();
/// assert_eq!(expr,
///            Expression { left:     10.0,
///                         operator: Operator::Div,
///                         right:    4.0, });
/// ```
pub fn parse_expression(line: &str) -> EvalResult<Expression> {
    let tokens = tokenize(line);
    debug!(count = tokens.len(), "tokenized line");

    let [left, symbol, right] = tokens.as_slice() else {
        return Err(EvalError::InvalidFormat { found: tokens.len() });
    };

    let left = parse_operand(left, Side::Left)?;
    let right = parse_operand(right, Side::Right)?;
    let operator = symbol.parse::<Operator>()?;

    let expression = Expression { left,
                                  operator,
                                  right };
    debug!(%expression, "parsed expression");

    Ok(expression)
}

/// Parses a single operand token as an `f64`.
///
/// Accepts everything `f64::from_str` accepts, including a leading sign,
/// exponent notation, `inf` and `nan`.
///
/// # Parameters
/// - `token`: The operand as written.
/// - `side`: Which operand this is, for error reporting.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(EvalError::InvalidOperand)`: If the token is not a number.
///
/// # Example
/// ```
/// use calcline::{ast::Side, error::EvalError, interpreter::parser::parse_operand};
///
/// assert_eq!(parse_operand("-2.5e1", Side::Left).unwrap(), -25.0);
///
/// let err = parse_operand("five", Side::Right).unwrap_err();
/// assert_eq!(err,
///            EvalError::InvalidOperand { side:  Side::Right,
///                                        token: "five".to_string(), });
/// ```
pub fn parse_operand(token: &str, side: Side) -> EvalResult<f64> {
    token.parse::<f64>()
         .map_err(|_| EvalError::InvalidOperand { side,
                                                  token: token.to_string() })
}
