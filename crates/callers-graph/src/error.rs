//! Error types for hierarchy construction and rendering.

use std::io;
use std::process::ExitStatus;
use std::sync::Arc;

use thiserror::Error;

use crate::oracle::QueryKind;

/// Errors returned by an [`Oracle`](crate::Oracle) query.
#[derive(Debug, Clone, Error)]
pub enum OracleError {
    /// The oracle process could not be started.
    #[error("`{program} {kind}` failed: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Query that was issued.
        kind: QueryKind,
        /// Underlying spawn error wrapped in Arc for Clone support.
        #[source]
        source: Arc<io::Error>,
    },

    /// The oracle process exited unsuccessfully.
    #[error("`{program} {kind}` failed: {status}: {output}")]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Query that was issued.
        kind: QueryKind,
        /// Exit status reported by the process.
        status: ExitStatus,
        /// Combined stdout and stderr of the process.
        output: String,
    },

    /// A scripted or in-process oracle rejected the query.
    #[error("`{kind}` query failed: {message}")]
    Rejected {
        /// Query that was issued.
        kind: QueryKind,
        /// Description of the failure.
        message: String,
    },
}

impl OracleError {
    /// Creates a new `Spawn` error.
    #[must_use]
    pub fn spawn(program: impl Into<String>, kind: QueryKind, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            kind,
            source: Arc::new(source),
        }
    }

    /// Creates a new `Failed` error.
    #[must_use]
    pub fn failed(
        program: impl Into<String>,
        kind: QueryKind,
        status: ExitStatus,
        output: impl Into<String>,
    ) -> Self {
        Self::Failed {
            program: program.into(),
            kind,
            status,
            output: output.into(),
        }
    }

    /// Creates a new `Rejected` error.
    #[must_use]
    pub fn rejected(kind: QueryKind, message: impl Into<String>) -> Self {
        Self::Rejected {
            kind,
            message: message.into(),
        }
    }
}

/// Errors returned while resolving or building a hierarchy.
#[derive(Debug, Clone, Error)]
pub enum HierarchyError {
    /// The oracle query failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The symbol at the position is not a function.
    #[error("{position} is not a function")]
    NotAFunction {
        /// Position that was queried.
        position: String,
    },

    /// The supplied position was empty.
    #[error("position must not be empty")]
    EmptyPosition,
}

impl HierarchyError {
    /// Creates a new `NotAFunction` error.
    #[must_use]
    pub fn not_a_function(position: impl Into<String>) -> Self {
        Self::NotAFunction {
            position: position.into(),
        }
    }
}

/// Errors returned while rendering a hierarchy.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The tree could not be serialised.
    #[error("failed to serialise hierarchy: {0}")]
    Serialise(#[from] serde_json::Error),

    /// The rendered output could not be written.
    #[error("failed to write hierarchy: {0}")]
    Write(#[from] io::Error),
}
