use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use calcline::{
    evaluate,
    session::{DEFAULT_PROMPT, DEFAULT_SENTINEL, Session, SessionConfig},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter, such as `calcline=debug`.
const LOG_ENV: &str = "CALCLINE_LOG";

/// calcline evaluates binary arithmetic expressions such as `5 + 3`, one line
/// at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression, prints its value and exits.
    #[arg(conflicts_with = "file", allow_hyphen_values = true)]
    expression: Option<String>,

    /// Evaluates every line of a file instead of reading from the terminal.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Prompt shown before each line in interactive mode.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Word that ends the session.
    #[arg(short, long, default_value = DEFAULT_SENTINEL)]
    sentinel: String,

    /// Enables debug logging on stderr.
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    if let Some(expression) = &args.expression {
        return match evaluate(expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let result = if let Some(path) = &args.file {
        let Ok(file) = File::open(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };

        Session::new(SessionConfig { prompt:   String::new(),
                                     sentinel: args.sentinel,
                                     echo:     true, }).run(BufReader::new(file),
                                                            io::stdout().lock())
    } else {
        println!("Enter an expression such as '5 + 3', or '{}' to exit.",
                 args.sentinel);

        Session::new(SessionConfig { prompt:   args.prompt,
                                     sentinel: args.sentinel,
                                     echo:     false, }).run(io::stdin().lock(),
                                                             io::stdout().lock())
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
