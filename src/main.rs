use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use soch::{interpreter::evaluator::core::Interpreter, run, util::position::Source};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// soch is a small expression language with Hindi keywords.
///
/// Without `contents`, soch starts an interactive session in which bindings
/// persist from one line to the next.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells soch to treat `contents` as a path to a file instead of a
    /// program.
    #[arg(short, long)]
    file: bool,

    /// Logs each pipeline stage to stderr. `RUST_LOG` overrides this.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "soch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Runs a single program and prints its value or its error report.
fn run_program(source: &Source, interpreter: &mut Interpreter) -> bool {
    match run(source, interpreter) {
        Ok(Some(value)) => {
            println!("{value}");
            true
        },
        Ok(None) => true,
        Err(e) => {
            eprintln!("{}", e.render(source));
            false
        },
    }
}

fn repl() -> ExitCode {
    info!("starting interactive session");
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("soch > ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read from stdin: {e}");
                return ExitCode::FAILURE;
            },
            None => {
                println!();
                return ExitCode::SUCCESS;
            },
        };

        if line.trim().is_empty() {
            continue;
        }
        run_program(&Source::new("<stdin>", line), &mut interpreter);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(contents) = args.contents else {
        return repl();
    };

    let source = if args.file {
        match fs::read_to_string(&contents) {
            Ok(text) => Source::new(contents, text),
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        Source::new("<args>", contents)
    };
    debug!(file = source.name(), "running program");

    if run_program(&source, &mut Interpreter::new()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
