use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
};

use calcline::{
    error::SessionError,
    session::{Session, SessionConfig, Summary},
};

fn quiet_session() -> Session {
    Session::new(SessionConfig { prompt: String::new(),
                                 ..SessionConfig::default() })
}

fn run(session: &Session, input: &str) -> (Summary, String) {
    let mut output = Vec::<u8>::new();
    let summary = session.run(input.as_bytes(), &mut output)
                         .unwrap_or_else(|e| panic!("Session failed: {e}"));
    (summary, String::from_utf8(output).expect("output is not UTF-8"))
}

#[test]
fn sentinel_stops_before_remaining_lines() {
    let (summary, output) = run(&quiet_session(), "1 + 1\nquit\n2 + 2\n");

    assert_eq!(output, "= 2\n");
    assert_eq!(summary,
               Summary { evaluated: 1,
                         succeeded: 1,
                         failed:    0, });
}

#[test]
fn sentinel_ignores_whitespace_and_case() {
    let session = quiet_session();

    for sentinel in ["quit", "  quit  ", "QUIT", "Quit\r"] {
        let (summary, output) = run(&session, &format!("{sentinel}\n3 * 3\n"));
        assert_eq!(summary.evaluated, 0, "'{sentinel}' was not treated as the sentinel");
        assert!(output.is_empty());
    }
}

#[test]
fn custom_sentinel() {
    let session = Session::new(SessionConfig { prompt: String::new(),
                                               sentinel: "exit".to_string(),
                                               echo: false });
    let (summary, output) = run(&session, "quit\nexit\n1 + 1\n");

    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.failed, 1);
    assert!(output.starts_with("error: Invalid format"));
}

#[test]
fn errors_do_not_stop_the_loop() {
    let (summary, output) = run(&quiet_session(), "10 / 0\nabc + 2\n5 ^ 2\n10 / 2\n");

    assert_eq!(output,
               "error: Division by zero.\n\
                error: Invalid left operand 'abc': not a number.\n\
                error: Unknown operator '^'. Supported operators are +, -, * and /.\n\
                = 5\n");
    assert_eq!(summary,
               Summary { evaluated: 4,
                         succeeded: 1,
                         failed:    3, });
}

#[test]
fn end_of_input_without_sentinel_ends_normally() {
    let (summary, output) = run(&quiet_session(), "5 + 3");

    assert_eq!(output, "= 8\n");
    assert_eq!(summary.evaluated, 1);
}

#[test]
fn empty_input_evaluates_nothing() {
    let (summary, output) = run(&quiet_session(), "");

    assert_eq!(summary, Summary::default());
    assert!(output.is_empty());
}

#[test]
fn blank_lines_are_forwarded() {
    let (summary, output) = run(&quiet_session(), "\n   \n");

    assert_eq!(summary.failed, 2);
    assert_eq!(output.lines().count(), 2);
    assert!(output.lines().all(|l| l.contains("found 0 token(s)")));
}

#[test]
fn crlf_line_endings_are_stripped() {
    let (summary, output) = run(&quiet_session(), "6 * 7\r\nquit\r\n");

    assert_eq!(output, "= 42\n");
    assert_eq!(summary.succeeded, 1);
}

#[test]
fn prompt_is_written_before_every_read() {
    let session = Session::new(SessionConfig::default());
    let (_, output) = run(&session, "1 + 2\nquit\n");

    assert_eq!(output, "> = 3\n> ");
}

#[test]
fn echo_writes_input_before_result() {
    let session = Session::new(SessionConfig { prompt: String::new(),
                                               sentinel: "quit".to_string(),
                                               echo: true });
    let (_, output) = run(&session, "  5   +   3  \n");

    assert_eq!(output, "  5   +   3  \n= 8\n");
}

#[test]
fn example_file_runs() {
    let file = File::open("tests/example.calc").expect("missing file");
    let mut output = Vec::<u8>::new();

    let summary = quiet_session().run(BufReader::new(file), &mut output)
                                 .expect("session failed");

    assert_eq!(summary,
               Summary { evaluated: 6,
                         succeeded: 3,
                         failed:    3, });
    let output = String::from_utf8(output).expect("output is not UTF-8");
    assert_eq!(output.lines().collect::<Vec<_>>(),
               ["= 8",
                "error: Division by zero.",
                "= 25",
                "error: Invalid left operand 'abc': not a number.",
                "error: Unknown operator '^'. Supported operators are +, -, * and /.",
                "= 42"]);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::other("disk on fire"))
    }

    fn consume(&mut self, _: usize) {}
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn read_failure_is_session_error() {
    let result = quiet_session().run(FailingReader, Vec::<u8>::new());

    assert!(matches!(result, Err(SessionError::Io(_))));
}

#[test]
fn write_failure_is_session_error() {
    let result = quiet_session().run("1 + 1\n".as_bytes(), FailingWriter);

    assert!(matches!(result, Err(SessionError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe));
}
