//! CLI argument definitions for the `callers` tool.

use clap::Parser;

use callers_graph::OutputFormat;

/// Command-line interface for the `callers` tool.
///
/// Configuration flags such as `--oracle` are split off before these
/// arguments are parsed; see [`crate::config`].
#[derive(Parser, Debug)]
#[command(
    name = "callers",
    version,
    about = "Builds the caller hierarchy of the function at a source position"
)]
pub(crate) struct Cli {
    /// Renders a Mermaid flowchart instead of JSON.
    #[arg(short = 'm', long)]
    pub(crate) mermaid: bool,
    /// Source position in the oracle's syntax (for example `main.go:10:6`).
    #[arg(value_name = "POSITION")]
    pub(crate) position: Option<String>,
}

impl Cli {
    /// Returns the renderer selected on the command line.
    pub(crate) const fn output_format(&self) -> OutputFormat {
        if self.mermaid {
            OutputFormat::Mermaid
        } else {
            OutputFormat::Json
        }
    }

    /// Returns the position when one was supplied.
    pub(crate) fn position(&self) -> Option<&str> {
        self.position
            .as_deref()
            .filter(|position| !position.trim().is_empty())
    }
}
