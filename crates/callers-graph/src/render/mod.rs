//! Output renderers for completed hierarchies.
//!
//! Both renderers are read-only depth-first walks of a finished tree. The
//! caller picks one through [`OutputFormat`].

use std::io::Write;

use crate::error::RenderError;
use crate::function::Function;

mod json;
mod mermaid;

pub use json::{render_json, write_json};
pub use mermaid::{MermaidDiagram, render_mermaid};

/// Output format for a rendered hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-indented nested JSON document.
    #[default]
    Json,
    /// Mermaid top-down flowchart.
    Mermaid,
}

/// Renders `root` in `format` to `writer`.
///
/// # Errors
/// Returns an error if serialisation or writing fails.
pub fn render<W: Write>(
    root: &Function,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Json => write_json(root, writer)?,
        OutputFormat::Mermaid => write!(writer, "{}", MermaidDiagram::new(root))?,
    }
    writer.flush()?;
    Ok(())
}
