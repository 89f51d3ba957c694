//! Advisory validation of node configuration.
//!
//! Issues feed the property-editing surface (required markers, red fields).
//! They never block compilation: required-but-empty values still reach the
//! backend verbatim.

use crate::graph::node::{CanvasNode, NodeId};
use crate::graph::store::GraphStore;
use crate::graph::view::DependencyGraph;
use crate::resolve::Binding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Required parameter with no value and no applied default.
    MissingParameter,
    /// Required artifact slot with no binding selected.
    UnboundArtifact,
    /// Binding references a source no longer wired into this node
    /// (left behind by an edge deletion).
    StaleBinding,
    /// Binding value that does not parse as `sourceId::outputName`.
    MalformedBinding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub node_id: NodeId,
    pub field: String,
    pub kind: IssueKind,
}

/// Check one node against its loaded schema and current incoming wiring.
/// A node with no schema yet yields no issues — there is nothing to check
/// a value against.
pub fn check_node(node: &CanvasNode, incoming: &[&NodeId]) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let Some(schema) = &node.schema else {
        return issues;
    };

    for param in &schema.parameters {
        let empty = node
            .param(&param.name)
            .is_none_or(|v| v.trim().is_empty());
        if param.required && empty {
            issues.push(FieldIssue {
                node_id: node.id.clone(),
                field: param.name.clone(),
                kind: IssueKind::MissingParameter,
            });
        }
    }

    for artifact in &schema.artifacts {
        let value = node.param(&artifact.name).unwrap_or("");
        if value.is_empty() {
            if artifact.required {
                issues.push(FieldIssue {
                    node_id: node.id.clone(),
                    field: artifact.name.clone(),
                    kind: IssueKind::UnboundArtifact,
                });
            }
            continue;
        }
        let kind = match Binding::parse(value) {
            Some(binding) if incoming.contains(&&binding.source) => continue,
            Some(_) => IssueKind::StaleBinding,
            None => IssueKind::MalformedBinding,
        };
        issues.push(FieldIssue {
            node_id: node.id.clone(),
            field: artifact.name.clone(),
            kind,
        });
    }

    issues
}

/// Check every node in the store.
pub fn check_graph(store: &GraphStore) -> Vec<FieldIssue> {
    let view = DependencyGraph::build(store);
    store
        .nodes()
        .iter()
        .flat_map(|node| check_node(node, &view.incoming_sources(&node.id)))
        .collect()
}
