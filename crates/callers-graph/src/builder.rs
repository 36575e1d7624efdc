//! Recursive construction of caller hierarchies.
//!
//! The builder resolves the function enclosing a root position and then walks
//! its callers depth-first, asking the oracle about each one in turn. Failures
//! below the root never abort the walk: they are recorded in place as error
//! sentinels (see [`Function::error`]) and only the affected branch stops.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::HierarchyError;
use crate::function::Function;
use crate::oracle::{Oracle, QueryKind};
use crate::parse::{parse_callers, parse_definition};

/// Tracing target for hierarchy construction.
const BUILDER_TARGET: &str = "callers_graph::builder";

/// Builds caller hierarchies by querying an [`Oracle`].
#[derive(Debug)]
pub struct HierarchyBuilder<O> {
    oracle: O,
    max_depth: Option<u32>,
}

impl<O> HierarchyBuilder<O> {
    /// Creates a builder with unlimited depth.
    #[must_use]
    pub const fn new(oracle: O) -> Self {
        Self {
            oracle,
            max_depth: None,
        }
    }

    /// Limits how many caller levels below the root are expanded.
    ///
    /// Nodes at the limit are still attached but their callers are not
    /// queried. `None` removes the limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the oracle, consuming the builder.
    #[must_use]
    pub fn into_oracle(self) -> O {
        self.oracle
    }

    fn may_expand(&self, depth: u32) -> bool {
        self.max_depth.is_none_or(|limit| depth < limit)
    }
}

impl<O: Oracle> HierarchyBuilder<O> {
    /// Builds the full caller hierarchy for the function at `position`.
    ///
    /// # Errors
    /// Returns an error when the root position is empty, the oracle fails on
    /// the root query, or the root symbol is not a function. Failures deeper
    /// in the hierarchy are recorded as error sentinels instead.
    pub fn build(&mut self, position: &str) -> Result<Function, HierarchyError> {
        if position.trim().is_empty() {
            return Err(HierarchyError::EmptyPosition);
        }

        let mut root = self.resolve_definition(position)?;
        let mut ancestors = HashSet::new();
        self.expand(&mut root, &mut ancestors, 0);

        info!(
            target: BUILDER_TARGET,
            root = root.position(),
            nodes = root.node_count(),
            "call hierarchy built"
        );
        Ok(root)
    }

    /// Resolves the function enclosing `position`.
    ///
    /// The returned node has no callers attached.
    ///
    /// # Errors
    /// Returns the oracle failure unchanged, or
    /// [`HierarchyError::NotAFunction`] when the symbol is not a function.
    pub fn resolve_definition(&mut self, position: &str) -> Result<Function, HierarchyError> {
        let output = self.oracle.query(QueryKind::Definition, position)?;
        let definition = parse_definition(&output, position)?;
        debug!(
            target: BUILDER_TARGET,
            position = %definition.position,
            signature = %definition.signature,
            "resolved definition"
        );
        Ok(Function::new(definition.signature, definition.position))
    }

    /// Discovers and attaches the callers of `node`, recursively.
    ///
    /// Expansion treats `node` as the top of the walk: positions above it are
    /// unknown to the cycle guard.
    pub fn expand_callers(&mut self, node: &mut Function) {
        let mut ancestors = HashSet::new();
        self.expand(node, &mut ancestors, 0);
    }

    fn expand(&mut self, node: &mut Function, ancestors: &mut HashSet<String>, depth: u32) {
        if node.is_error() || !self.may_expand(depth) {
            return;
        }

        let output = match self.oracle.query(QueryKind::CallHierarchy, node.position()) {
            Ok(output) => output,
            Err(error) => {
                warn!(
                    target: BUILDER_TARGET,
                    position = node.position(),
                    error = %error,
                    "call hierarchy query failed"
                );
                node.push_caller(Function::error(error.to_string()));
                return;
            }
        };

        ancestors.insert(node.position().to_owned());
        for caller_position in parse_callers(&output) {
            let mut caller = match self.resolve_definition(&caller_position) {
                Ok(caller) => caller,
                Err(error) => {
                    warn!(
                        target: BUILDER_TARGET,
                        callee = node.position(),
                        caller = %caller_position,
                        error = %error,
                        "failed to resolve caller"
                    );
                    node.push_caller(Function::error(error.to_string()));
                    break;
                }
            };

            if ancestors.contains(caller.position()) {
                debug!(
                    target: BUILDER_TARGET,
                    position = caller.position(),
                    "caller already on the current path; not expanding"
                );
            } else {
                self.expand(&mut caller, ancestors, depth.saturating_add(1));
            }
            node.push_caller(caller);
        }
        ancestors.remove(node.position());
    }
}
