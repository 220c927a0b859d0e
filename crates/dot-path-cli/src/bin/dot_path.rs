//! `dot-path` — query and edit a JSON document by dot-path.
//!
//! Usage:
//!   dot-path [--input FILE] [--pretty] <command> [args]
//!
//! The document is read from stdin unless `--input` is given. Logging goes to
//! stderr and is controlled by `DOT_PATH_LOG` (default `warn`).

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use dot_path_cli::cli::Cli;
use dot_path_cli::{parse_document, render, run, CliError};
use tracing_subscriber::EnvFilter;

fn read_input(cli: &Cli) -> Result<String, CliError> {
    match &cli.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn execute(cli: &Cli) -> Result<String, CliError> {
    let doc = parse_document(&read_input(cli)?)?;
    let out = run(&cli.command, doc)?;
    render(&out, cli.pretty)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("DOT_PATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{text}") {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
