//! Canonical node/edge store and selection state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::types::TemplateSummary;
use crate::error::ComposerError;
use crate::graph::node::{CanvasNode, NodeId, NodePatch, Position};

/// A directed dependency between two nodes. Multiple edges between the same
/// pair are permitted, and nothing here prevents self-loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Canonical graph state: insertion-ordered nodes and edges plus the
/// (transient) selection. All identifier minting happens here.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<CanvasNode>,
    edges: Vec<Edge>,
    selection: Option<NodeId>,
    next_id: u64,
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore::default()
    }

    /// Create a node from a dropped catalog record. The schema starts
    /// unloaded and params empty; the entrypoint defaults to the template's
    /// declared default, falling back to its first entrypoint.
    pub fn add_node(&mut self, template: &TemplateSummary, position: Position) -> NodeId {
        let id = NodeId(format!("node-{}", self.next_id));
        self.next_id += 1;

        let selected_entrypoint = template
            .default_entrypoint
            .clone()
            .or_else(|| template.entrypoints.first().cloned())
            .unwrap_or_default();

        self.nodes.push(CanvasNode {
            id: id.clone(),
            label: template.name.clone(),
            template_id: template.name.clone(),
            entrypoints: template.entrypoints.clone(),
            selected_entrypoint,
            schema: None,
            params: BTreeMap::new(),
            position,
            load_error: None,
        });
        id
    }

    pub fn nodes(&self) -> &[CanvasNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Connect `source` to `target`. Both endpoints must exist; duplicate
    /// edges between the same pair are accepted.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> Result<(), ComposerError> {
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(ComposerError::UnknownNode(id.clone()));
            }
        }
        self.edges.push(Edge {
            source: source.clone(),
            target: target.clone(),
        });
        Ok(())
    }

    /// Remove the first edge matching the pair, if any. Bindings in the
    /// target's params that referenced this source are left in place; the
    /// advisory checks report them as stale.
    pub fn disconnect(&mut self, source: &NodeId, target: &NodeId) {
        if let Some(pos) = self
            .edges
            .iter()
            .position(|e| &e.source == source && &e.target == target)
        {
            self.edges.remove(pos);
        }
    }

    pub fn select(&mut self, id: &NodeId) -> Result<(), ComposerError> {
        if self.node(id).is_none() {
            return Err(ComposerError::UnknownNode(id.clone()));
        }
        self.selection = Some(id.clone());
        Ok(())
    }

    /// Clicking empty canvas area.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selection.as_ref()
    }

    pub fn selection(&self) -> Option<&CanvasNode> {
        self.selection.as_ref().and_then(|id| self.node(id))
    }

    /// Merge a partial update into a node. See `NodePatch` for the merge
    /// rule: `params` merges key-by-key, other fields replace outright.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> Result<(), ComposerError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| ComposerError::UnknownNode(id.clone()))?;

        if let Some(entrypoint) = patch.selected_entrypoint {
            node.selected_entrypoint = entrypoint;
        }
        if let Some(schema) = patch.schema {
            node.schema = schema;
        }
        if let Some(load_error) = patch.load_error {
            node.load_error = load_error;
        }
        if let Some(params) = patch.params {
            node.params.extend(params);
        }
        Ok(())
    }

    /// Switch a node's entrypoint. The new value must be one the template
    /// offers. The schema is cleared in the same mutation, so no stale form
    /// state is ever observable between the change and the refetch.
    pub fn set_entrypoint(&mut self, id: &NodeId, entrypoint: &str) -> Result<(), ComposerError> {
        let node = self
            .node(id)
            .ok_or_else(|| ComposerError::UnknownNode(id.clone()))?;

        if !node.entrypoints.iter().any(|e| e == entrypoint) {
            return Err(ComposerError::EntrypointNotOffered {
                template: node.template_id.clone(),
                entrypoint: entrypoint.to_string(),
            });
        }

        self.update_node(
            id,
            NodePatch {
                selected_entrypoint: Some(entrypoint.to_string()),
                schema: Some(None),
                ..NodePatch::default()
            },
        )
    }
}
