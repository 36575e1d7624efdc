//! Line patterns for oracle responses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::HierarchyError;

#[expect(clippy::expect_used, reason = "pattern is a valid literal")]
static DEFINITION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+:) defined here as (func .+)$").expect("definition pattern compiles")
});

#[expect(clippy::expect_used, reason = "pattern is a valid literal")]
static CALLER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^caller\[\d+\]:.+function .+ in (.+)$").expect("caller pattern compiles")
});

/// Facts extracted from the first line of a definition response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Canonical position prefix, including its trailing colon.
    pub position: String,
    /// Function signature text.
    pub signature: String,
}

/// Parses the definition line of an oracle response.
///
/// Only the first line is considered. `queried` is reported back when the
/// line does not describe a function.
///
/// # Errors
/// Returns [`HierarchyError::NotAFunction`] when the first line does not
/// match the definition pattern.
pub fn parse_definition(output: &str, queried: &str) -> Result<Definition, HierarchyError> {
    let first_line = lines(output).next().unwrap_or_default();
    DEFINITION_LINE
        .captures(first_line)
        .and_then(|captures| {
            let position = captures.get(1)?.as_str();
            let signature = captures.get(2)?.as_str();
            Some(Definition {
                position: position.to_owned(),
                signature: signature.to_owned(),
            })
        })
        .ok_or_else(|| HierarchyError::not_a_function(queried))
}

/// Extracts caller positions from a call hierarchy response.
///
/// Lines that do not name a caller are skipped. Positions are returned in
/// the order the oracle listed them.
#[must_use]
pub fn parse_callers(output: &str) -> Vec<String> {
    lines(output)
        .filter_map(|line| CALLER_LINE.captures(line))
        .filter_map(|captures| captures.get(1))
        .map(|position| position.as_str().to_owned())
        .collect()
}

fn lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
