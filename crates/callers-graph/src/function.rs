//! Hierarchy node representation.

use serde::{Deserialize, Serialize};

/// Position shared by every error sentinel.
pub const ERROR_POSITION: &str = "Error";

/// A function in the call hierarchy together with its callers.
///
/// Each node owns its callers outright; there are no parent links. The
/// serialised field names match the structured document format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Signature text reported by the oracle, or a failure message.
    #[serde(rename = "Name")]
    name: String,
    /// Canonical `file:line:column` position, or [`ERROR_POSITION`].
    #[serde(rename = "Position")]
    position: String,
    /// Direct callers in discovery order.
    #[serde(rename = "CalledBy")]
    called_by: Vec<Self>,
}

impl Function {
    /// Creates a function node without callers.
    #[must_use]
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            called_by: Vec::new(),
        }
    }

    /// Creates an error sentinel carrying the failure message as its name.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ERROR_POSITION)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical position.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the direct callers in discovery order.
    #[must_use]
    pub fn called_by(&self) -> &[Self] {
        &self.called_by
    }

    /// Returns whether this node stands in for a failed lookup.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.position == ERROR_POSITION
    }

    /// Appends a caller, preserving insertion order.
    pub fn push_caller(&mut self, caller: Self) {
        self.called_by.push(caller);
    }

    /// Returns the total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .called_by
            .iter()
            .map(Self::node_count)
            .sum::<usize>()
    }
}
