//! Oracle client abstractions.
//!
//! The oracle is an external analysis tool answering two text queries about
//! a source position. [`Oracle`] abstracts over how those queries are served
//! so the hierarchy builder can be exercised against scripted responses;
//! [`CommandOracle`] runs one process per query.

use std::fmt;
use std::process::Command;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::OracleError;

/// Tracing target for oracle queries.
const ORACLE_TARGET: &str = "callers_graph::oracle";

/// Query kinds understood by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Locates the function enclosing a position.
    Definition,
    /// Lists the direct callers of the function at a position.
    CallHierarchy,
}

impl QueryKind {
    /// Returns the oracle subcommand for this query.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::CallHierarchy => "call_hierarchy",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of definition and call hierarchy text.
pub trait Oracle {
    /// Runs `kind` at `position` and returns the raw response text.
    ///
    /// # Errors
    /// Returns an error if the query cannot be issued or the oracle reports
    /// a failure.
    fn query(&mut self, kind: QueryKind, position: &str) -> Result<String, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn query(&mut self, kind: QueryKind, position: &str) -> Result<String, OracleError> {
        (**self).query(kind, position)
    }
}

/// Oracle backed by an external executable such as `gopls`.
///
/// Each query runs `<program> <kind> <position>` to completion and captures
/// stdout and stderr together.
#[derive(Debug, Clone)]
pub struct CommandOracle {
    program: String,
}

impl CommandOracle {
    /// Creates an oracle that invokes `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the program invoked for each query.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Oracle for CommandOracle {
    fn query(&mut self, kind: QueryKind, position: &str) -> Result<String, OracleError> {
        let start = Instant::now();
        debug!(
            target: ORACLE_TARGET,
            program = %self.program,
            kind = %kind,
            position,
            "running oracle query"
        );

        let output = Command::new(&self.program)
            .arg(kind.as_str())
            .arg(position)
            .output()
            .map_err(|err| {
                warn!(
                    target: ORACLE_TARGET,
                    program = %self.program,
                    error = %err,
                    "failed to start oracle"
                );
                OracleError::spawn(&self.program, kind, err)
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(
            target: ORACLE_TARGET,
            kind = %kind,
            position,
            status = %output.status,
            output_bytes = combined.len(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "oracle query finished"
        );

        if output.status.success() {
            Ok(combined)
        } else {
            Err(OracleError::failed(
                &self.program,
                kind,
                output.status,
                combined,
            ))
        }
    }
}
