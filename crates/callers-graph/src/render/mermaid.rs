//! Mermaid flowchart renderer.

use std::collections::HashSet;
use std::fmt;

use crate::function::{ERROR_POSITION, Function};

/// Mermaid flowchart of a hierarchy, drawn as caller `-->` callee edges.
///
/// Each position is expanded at most once per rendering, so a function
/// reachable along several branches contributes its edges only once.
#[derive(Debug, Clone, Copy)]
pub struct MermaidDiagram<'a> {
    root: &'a Function,
}

impl<'a> MermaidDiagram<'a> {
    /// Wraps `root` for rendering.
    #[must_use]
    pub const fn new(root: &'a Function) -> Self {
        Self { root }
    }
}

impl fmt::Display for MermaidDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph TD")?;
        let mut visited = HashSet::new();
        write_edges(f, self.root, &mut visited)?;
        writeln!(f, "    style {ERROR_POSITION} fill:#f66,stroke:#900")
    }
}

/// Renders `root` as a Mermaid flowchart description.
#[must_use]
pub fn render_mermaid(root: &Function) -> String {
    MermaidDiagram::new(root).to_string()
}

fn write_edges<'a>(
    f: &mut fmt::Formatter<'_>,
    callee: &'a Function,
    visited: &mut HashSet<&'a str>,
) -> fmt::Result {
    if !visited.insert(callee.position()) {
        return Ok(());
    }

    for caller in callee.called_by() {
        writeln!(
            f,
            "    {}[\"{}\"]-->{}[\"{}\"]",
            caller.position(),
            label(caller.name()),
            callee.position(),
            label(callee.name()),
        )?;
        write_edges(f, caller, visited)?;
    }
    Ok(())
}

fn label(name: &str) -> String {
    name.replace('"', "#quot;")
}
