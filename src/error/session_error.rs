#[derive(Debug, thiserror::Error)]
/// Represents the errors that stop a session before its input is exhausted.
pub enum SessionError {
    /// Reading a line or writing a result failed.
    #[error("I/O error during session: {0}")]
    Io(#[from] std::io::Error),
}
