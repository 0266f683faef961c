/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator applies the expression's operator to its two operands using
/// native `f64` arithmetic. It is the only stage that can report a division
/// by zero.
///
/// # Responsibilities
/// - Dispatches on the operator and performs the arithmetic.
/// - Intercepts division by exactly zero instead of producing infinity or NaN.
pub mod evaluator;
/// The lexer module splits a line of input into tokens.
///
/// A token is any run of non-whitespace characters. Runs of whitespace of any
/// length, including tabs, separate tokens and are discarded. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input line into an ordered list of borrowed tokens.
/// - Treats leading, trailing and repeated whitespace as insignificant.
pub mod lexer;
/// The parser module builds an [`crate::ast::Expression`] from tokens.
///
/// The parser checks that a line has the `<number> <operator> <number>` shape,
/// converts both operands to `f64` and resolves the operator symbol.
///
/// # Responsibilities
/// - Rejects lines that do not contain exactly three tokens.
/// - Reports which operand failed to parse, and the offending token.
/// - Reports unsupported operator symbols.
pub mod parser;
