//! Caller hierarchy discovery for the `callers` toolchain.
//!
//! Starting from a source position, the crate resolves the enclosing function
//! and then recursively discovers every caller, and every caller of a caller,
//! by querying an external analysis oracle such as `gopls`. The result is an
//! owned tree of [`Function`] nodes that can be rendered as JSON or as a
//! Mermaid flowchart.
//!
//! # Core Types
//!
//! - [`Function`] - A function and the callers discovered for it
//! - [`Oracle`] - Source of `definition` and `call_hierarchy` text
//! - [`HierarchyBuilder`] - Recursive, failure-tolerant tree construction
//!
//! # Example
//!
//! ```no_run
//! use callers_graph::{CommandOracle, HierarchyBuilder, OutputFormat, render};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = HierarchyBuilder::new(CommandOracle::new("gopls"));
//! let root = builder.build("main.go:10:6")?;
//! render(&root, OutputFormat::Mermaid, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod function;
mod oracle;
mod parse;
mod render;

pub use builder::HierarchyBuilder;
pub use error::{HierarchyError, OracleError, RenderError};
pub use function::{ERROR_POSITION, Function};
pub use oracle::{CommandOracle, Oracle, QueryKind};
pub use parse::{Definition, parse_callers, parse_definition};
pub use render::{
    MermaidDiagram, OutputFormat, render, render_json, render_mermaid, write_json,
};
