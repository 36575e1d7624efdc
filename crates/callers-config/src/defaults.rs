//! Built-in configuration values.

use crate::logging::LogFormat;

/// Oracle executable used when none is configured.
pub const DEFAULT_ORACLE: &str = "gopls";

/// Default log filter expression used by the binary.
///
/// Hierarchy output shares the terminal with logs on stderr, so only
/// warnings surface unless the operator asks for more.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default oracle executable.
#[must_use]
pub fn default_oracle() -> String {
    DEFAULT_ORACLE.to_owned()
}

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
