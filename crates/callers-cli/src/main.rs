//! CLI entrypoint for the `callers` hierarchy tool.
//!
//! The binary delegates to [`callers_cli::run`], which loads configuration,
//! parses the position argument, builds the caller hierarchy and renders it
//! to stdout.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    callers_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
