//! Artifact-binding encoding: `sourceId::outputName`.
//!
//! A binding ties an artifact-input slot to one upstream output. It lives
//! entirely inside the target node's params as a plain string; edges carry
//! no slot metadata.

use crate::graph::node::NodeId;

pub const BINDING_SEPARATOR: &str = "::";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub source: NodeId,
    pub output: String,
}

impl Binding {
    pub fn new(source: NodeId, output: impl Into<String>) -> Self {
        Binding {
            source,
            output: output.into(),
        }
    }

    pub fn encode(&self) -> String {
        format!("{}{}{}", self.source, BINDING_SEPARATOR, self.output)
    }

    /// Parse an encoded binding. Returns None for the empty (unbound) value
    /// or anything that is not two non-empty halves around the separator.
    pub fn parse(value: &str) -> Option<Binding> {
        let (source, output) = value.split_once(BINDING_SEPARATOR)?;
        if source.is_empty() || output.is_empty() {
            return None;
        }
        Some(Binding {
            source: NodeId::from(source),
            output: output.to_string(),
        })
    }
}
