use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{error::SessionError, evaluate, interpreter::evaluator::EvalResult};

/// Default prompt written before each line is read.
pub const DEFAULT_PROMPT: &str = "> ";
/// Default word that ends a session.
pub const DEFAULT_SENTINEL: &str = "quit";

/// Settings for an input session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Written (and flushed) before every read. Empty disables the prompt.
    pub prompt:   String,
    /// A line equal to this word, ignoring surrounding whitespace and ASCII
    /// case, ends the session.
    pub sentinel: String,
    /// Write each input line back before its result.
    pub echo:     bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { prompt:   DEFAULT_PROMPT.to_string(),
               sentinel: DEFAULT_SENTINEL.to_string(),
               echo:     false, }
    }
}

/// Counts of the lines a session forwarded to the evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines evaluated, successful or not.
    pub evaluated: usize,
    /// Lines that produced a value.
    pub succeeded: usize,
    /// Lines that produced an error.
    pub failed:    usize,
}

impl Summary {
    fn record(&mut self, result: &EvalResult<f64>) {
        self.evaluated += 1;
        if result.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Drives the read, evaluate, print loop.
///
/// ## Usage
///
/// A `Session` holds only its configuration, so one value can run any number
/// of loops over different readers and writers. Each call to [`Session::run`]
/// starts with a fresh [`Summary`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    /// Creates a session with the given configuration.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this session runs with.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Runs the loop until the sentinel is read or the input is exhausted.
    ///
    /// Each line has its line terminator removed and is otherwise forwarded
    /// unchanged to [`evaluate`], so blank lines are reported as malformed.
    /// Evaluation errors are written to `writer` like any other result and do
    /// not stop the loop.
    ///
    /// # Parameters
    /// - `reader`: Source of input lines.
    /// - `writer`: Destination for prompts, echoed lines and results.
    ///
    /// # Returns
    /// A [`Summary`] of the lines that were evaluated.
    ///
    /// # Errors
    /// Returns `SessionError::Io` if reading from `reader` or writing to
    /// `writer` fails.
    ///
    /// # Example
    /// ```
    /// use calcline::session::{Session, SessionConfig};
    ///
    /// let session = Session::new(SessionConfig { prompt: String::new(),
    ///                                            ..SessionConfig::default() });
    /// let mut output = Vec::new();
    ///
    /// let summary = session.run("5 + 3\n1 / 0\nquit\n7 * 7\n".as_bytes(), &mut output)
    ///                      .unwrap();
    ///
    /// assert_eq!(summary.evaluated, 2);
    /// assert_eq!(String::from_utf8(output).unwrap(),
    ///            "= 8\nerror: Division by zero.\n");
    /// ```
    pub fn run<R, W>(&self, mut reader: R, mut writer: W) -> Result<Summary, SessionError>
        where R: BufRead,
              W: Write
    {
        let mut summary = Summary::default();
        let mut buffer = String::new();

        loop {
            if !self.config.prompt.is_empty() {
                write!(writer, "{}", self.config.prompt)?;
                writer.flush()?;
            }

            buffer.clear();
            if reader.read_line(&mut buffer)? == 0 {
                debug!("end of input");
                break;
            }

            let line = strip_line_ending(&buffer);
            if self.is_sentinel(line) {
                debug!(sentinel = %self.config.sentinel, "sentinel read, ending session");
                break;
            }

            if self.config.echo {
                writeln!(writer, "{line}")?;
            }

            debug!(line, "evaluating line");
            let result = evaluate(line);
            summary.record(&result);
            writeln!(writer, "{}", Self::render(&result))?;
        }

        writer.flush()?;
        info!(evaluated = summary.evaluated,
              succeeded = summary.succeeded,
              failed = summary.failed,
              "session finished");

        Ok(summary)
    }

    /// Formats an evaluation result for display.
    ///
    /// Values are shown with Rust's shortest round-trip formatting, so `8.0`
    /// is shown as `8`. Errors are shown with their message.
    ///
    /// # Example
    /// ```
    /// use calcline::{EvalError, session::Session};
    ///
    /// assert_eq!(Session::render(&Ok(2.5)), "= 2.5");
    /// assert_eq!(Session::render(&Err(EvalError::DivisionByZero)),
    ///            "error: Division by zero.");
    /// ```
    #[must_use]
    pub fn render(result: &EvalResult<f64>) -> String {
        match result {
            Ok(value) => format!("= {value}"),
            Err(e) => format!("error: {e}"),
        }
    }

    /// Whether `line` is the sentinel word.
    #[must_use]
    pub fn is_sentinel(&self, line: &str) -> bool {
        line.trim().eq_ignore_ascii_case(&self.config.sentinel)
    }
}

/// Removes a trailing `\n` or `\r\n`, and nothing else.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
