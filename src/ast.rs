use std::{fmt, str::FromStr};

use crate::error::EvalError;

/// An arithmetic operator accepted between the two operands of an expression.
///
/// Operators are recognised from a single-character symbol. The set is
/// closed: anything other than `+`, `-`, `*` or `/` is rejected with
/// [`EvalError::UnknownOperator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Every supported operator, in the order they are listed to users.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the symbol this operator is written with.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::Operator;
    ///
    /// assert_eq!(Operator::Mul.symbol(), "*");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    /// Matches a token against the operator symbols.
    ///
    /// The token must be exactly one of the symbols; `"++"` or `" +"` are
    /// unknown operators, not `Add`.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::Operator, error::EvalError};
    ///
    /// assert_eq!("/".parse::<Operator>().unwrap(), Operator::Div);
    /// assert!(matches!("%".parse::<Operator>(),
    ///                  Err(EvalError::UnknownOperator { symbol }) if symbol == "%"));
    /// ```
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or_else(|| EvalError::UnknownOperator { symbol: symbol.to_string() })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which operand of an expression a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The operand before the operator.
    Left,
    /// The operand after the operator.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A parsed binary expression: `<left> <operator> <right>`.
///
/// Built by [`crate::interpreter::parser::parse_expression`] and consumed by
/// [`crate::interpreter::evaluator::eval_expression`]. It holds no reference
/// to the source line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    /// The operand before the operator.
    pub left:     f64,
    /// The operation to apply.
    pub operator: Operator,
    /// The operand after the operator.
    pub right:    f64,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}
