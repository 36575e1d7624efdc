//! Scripted oracle shared by the builder and behaviour tests.

use std::collections::HashMap;

use crate::{Oracle, OracleError, QueryKind};

#[derive(Clone, Debug)]
pub(super) enum Response {
    Ok(String),
    Err(String),
}

/// Oracle answering from a fixed table and recording every query.
#[derive(Clone, Debug, Default)]
pub(super) struct ScriptedOracle {
    responses: HashMap<(QueryKind, String), Response>,
    pub(super) queries: Vec<(QueryKind, String)>,
}

impl ScriptedOracle {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Scripts the definition query for `position` to resolve to `signature`.
    pub(super) fn function(mut self, position: &str, signature: &str) -> Self {
        self.responses.insert(
            (QueryKind::Definition, position.to_owned()),
            Response::Ok(definition_text(position, signature)),
        );
        self
    }

    /// Scripts the definition query for `position` to describe a variable.
    pub(super) fn variable(mut self, position: &str) -> Self {
        self.responses.insert(
            (QueryKind::Definition, position.to_owned()),
            Response::Ok(format!("{position}: defined here as var counter int\n")),
        );
        self
    }

    /// Scripts the call hierarchy of the function defined at `position`.
    pub(super) fn callers(mut self, position: &str, callers: &[&str]) -> Self {
        self.responses.insert(
            (QueryKind::CallHierarchy, canonical(position)),
            Response::Ok(call_hierarchy_text(position, callers)),
        );
        self
    }

    /// Scripts `kind` at `position` to fail with `message`.
    pub(super) fn failing(mut self, kind: QueryKind, position: &str, message: &str) -> Self {
        let key = match kind {
            QueryKind::Definition => position.to_owned(),
            QueryKind::CallHierarchy => canonical(position),
        };
        self.responses
            .insert((kind, key), Response::Err(message.to_owned()));
        self
    }

    pub(super) fn count(&self, kind: QueryKind) -> usize {
        self.queries.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl Oracle for ScriptedOracle {
    fn query(&mut self, kind: QueryKind, position: &str) -> Result<String, OracleError> {
        self.queries.push((kind, position.to_owned()));
        match self.responses.get(&(kind, position.to_owned())) {
            Some(Response::Ok(text)) => Ok(text.clone()),
            Some(Response::Err(message)) => Err(OracleError::rejected(kind, message.clone())),
            None => Err(OracleError::rejected(
                kind,
                format!("no scripted response for {position}"),
            )),
        }
    }
}

/// Position reported back by the oracle for a definition at `position`.
pub(super) fn canonical(position: &str) -> String {
    format!("{position}:")
}

pub(super) fn definition_text(position: &str, signature: &str) -> String {
    format!("{position}: defined here as {signature}\n")
}

pub(super) fn call_hierarchy_text(position: &str, callers: &[&str]) -> String {
    let mut text = format!("identifier: function target in {position}\n");
    for (index, caller) in callers.iter().enumerate() {
        text.push_str(&format!(
            "caller[{index}]: ranges 1:2-3 in {caller} from/to function f{index} in {caller}\n"
        ));
    }
    text
}
