//! Command-line runtime for the `callers` hierarchy tool.
//!
//! The module owns argument parsing, configuration bootstrapping, logging
//! setup, and output selection. Hierarchy construction and rendering live in
//! `callers-graph`; this crate wires them to a process oracle and to the
//! provided IO streams. The runtime can be exercised from tests with a
//! substitute configuration loader and oracle.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::error;

use callers_config::Config;
use callers_graph::{CommandOracle, HierarchyBuilder, Oracle, render};

mod cli;
mod config;
mod errors;
mod telemetry;

use cli::Cli;
use config::split_config_arguments;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub(crate) use errors::AppError;

/// Tracing target for the CLI runtime.
const CLI_TARGET: &str = "callers_cli";

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// The hierarchy is written to `stdout`. Usage text and failures go to
/// `stderr`, and the exit code reports whether a hierarchy was produced.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with(args, &mut io, &OrthoConfigLoader, |config: &Config| {
        CommandOracle::new(config.oracle())
    })
}

/// Runs the CLI with a custom configuration loader and oracle.
pub(crate) fn run_with<I, W, E, L, F, O>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
    make_oracle: F,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
    F: FnOnce(&Config) -> O,
    O: Oracle,
{
    let args: Vec<OsString> = args.into_iter().collect();
    match execute(&args, io, loader, make_oracle) {
        Ok(exit_code) => exit_code,
        Err(AppError::CliUsage(error)) if is_informational(&error) => {
            match write!(io.stdout, "{error}") {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            }
        }
        Err(error) => {
            error!(target: CLI_TARGET, error = %error, "run failed");
            // Nothing else can be reported if stderr itself is broken.
            drop(writeln!(io.stderr, "{error}"));
            ExitCode::FAILURE
        }
    }
}

fn execute<W, E, L, F, O>(
    args: &[OsString],
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
    make_oracle: F,
) -> Result<ExitCode, AppError>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
    F: FnOnce(&Config) -> O,
    O: Oracle,
{
    let split = split_config_arguments(args);
    let cli = Cli::try_parse_from(&split.command_arguments).map_err(AppError::CliUsage)?;

    let Some(position) = cli.position() else {
        write_usage(&mut *io.stderr);
        return Err(AppError::MissingPosition);
    };

    let config = loader.load(&split.config_arguments)?;
    telemetry::initialise(&config)?;

    let mut builder =
        HierarchyBuilder::new(make_oracle(&config)).with_max_depth(config.max_depth());
    let root = builder.build(position)?;
    render(&root, cli.output_format(), &mut *io.stdout)?;
    Ok(ExitCode::SUCCESS)
}

fn write_usage<E: Write>(stderr: &mut E) {
    let usage = Cli::command().render_usage();
    drop(writeln!(stderr, "{usage}"));
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
