/// Evaluation errors.
///
/// Defines the closed set of reasons a single line can fail to evaluate:
/// a wrong token count, an operand that is not a number, an unsupported
/// operator, or a division by zero. None of them are fatal; the caller reports
/// the reason and moves on to the next line.
pub mod eval_error;
/// Session errors.
///
/// Contains the errors that end an input session early. These come from the
/// reader or writer the session was given, never from the text being
/// evaluated.
pub mod session_error;

pub use eval_error::EvalError;
pub use session_error::SessionError;
