use crate::ast::Side;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while evaluating one line.
pub enum EvalError {
    /// The line did not split into exactly three tokens.
    #[error("Invalid format: expected '<number> <operator> <number>' but found {found} token(s).")]
    InvalidFormat {
        /// How many tokens the line actually contained.
        found: usize,
    },
    /// One of the operands could not be parsed as a number.
    #[error("Invalid {side} operand '{token}': not a number.")]
    InvalidOperand {
        /// Which operand was rejected.
        side:  Side,
        /// The offending token, as written.
        token: String,
    },
    /// The middle token is not a supported operator.
    #[error("Unknown operator '{symbol}'. Supported operators are +, -, * and /.")]
    UnknownOperator {
        /// The unrecognised symbol, as written.
        symbol: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
}

impl EvalError {
    /// A short, stable name for the error kind.
    ///
    /// Useful for logs and for test transcripts, where the full message would
    /// be noisy.
    ///
    /// # Example
    /// ```
    /// use calcline::error::EvalError;
    ///
    /// assert_eq!(EvalError::DivisionByZero.kind(), "DivisionByZero");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "InvalidFormat",
            Self::InvalidOperand { .. } => "InvalidOperand",
            Self::UnknownOperator { .. } => "UnknownOperator",
            Self::DivisionByZero => "DivisionByZero",
        }
    }
}
