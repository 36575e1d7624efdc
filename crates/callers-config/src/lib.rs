//! Shared configuration for the `callers` toolchain.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, an
//! optional TOML file (`--config-path` or `CALLERS_CONFIG_PATH`), environment
//! variables prefixed with `CALLERS_`, and finally command-line flags.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_ORACLE, default_log_filter, default_log_filter_string,
    default_log_format, default_oracle,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Runtime configuration for hierarchy discovery and logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "CALLERS")]
pub struct Config {
    /// Executable answering `definition` and `call_hierarchy` queries.
    #[ortho_config(default = default_oracle())]
    pub oracle: String,
    /// Maximum caller depth to expand below the root. Unlimited when unset.
    pub max_depth: Option<u32>,
    /// `tracing` filter expression applied to diagnostics.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for diagnostics written to stderr.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oracle: default_oracle(),
            max_depth: None,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Program invoked for oracle queries.
    #[must_use]
    pub fn oracle(&self) -> &str {
        &self.oracle
    }

    /// Depth limit for caller expansion, if any.
    #[must_use]
    pub const fn max_depth(&self) -> Option<u32> {
        self.max_depth
    }

    /// Filter expression for the tracing subscriber.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
