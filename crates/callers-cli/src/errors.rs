//! Error types for the CLI runtime.

use std::sync::Arc;

use thiserror::Error;

use callers_graph::{HierarchyError, RenderError};

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("a source position must be provided")]
    MissingPosition,
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("{0}")]
    Hierarchy(#[from] HierarchyError),
    #[error("failed to emit hierarchy: {0}")]
    Render(#[from] RenderError),
}
