//! Serde types for the workflow submission payload and its responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::S3Config;
use crate::graph::node::NodeId;

/// Requested action. Selects what the service does with the compiled
/// graph; it does not change the payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Submit,
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadNode {
    pub id: NodeId,
    pub template_name: String,
    pub entrypoint: String,
    /// Raw params mapping: scalar values and encoded artifact bindings
    /// alike, all as plain strings.
    pub arguments: BTreeMap<String, String>,
}

/// A bare dependency pair. Which artifact slot an edge services is carried
/// in the target node's arguments, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadEdge {
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowPayload {
    pub nodes: Vec<PayloadNode>,
    pub edges: Vec<PayloadEdge>,
    pub s3_config: S3Config,
    pub action: Action,
}

/// Successful outcome of a workflow run request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Submitted { workflow_name: String },
    Downloaded { yaml: String },
}
