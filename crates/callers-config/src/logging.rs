//! Output format for diagnostics written alongside hierarchy output.
//!
//! The format is read from `log_format` in the configuration file,
//! `CALLERS_LOG_FORMAT`, or `--log-format`, and matched case-insensitively.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported logging output formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, timestamped, for log collectors.
    Json,
    /// Untimestamped single-line events for interactive use.
    #[default]
    Compact,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;
