//! Node state for the canvas graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::types::{ArtifactDef, ParameterDef};

/// Opaque node identifier, minted by the store and never reused or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Display coordinates. Owned by the canvas collaborator; never read by
/// compilation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Parameter/artifact definitions cached on a node, tagged with the
/// entrypoint they were resolved for. A tag that no longer matches the
/// node's `selected_entrypoint` means the schema is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedSchema {
    pub parameters: Vec<ParameterDef>,
    pub artifacts: Vec<ArtifactDef>,
    pub entrypoint_loaded: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: NodeId,
    pub label: String,
    /// Immutable reference into the external template catalog.
    pub template_id: String,
    pub entrypoints: Vec<String>,
    pub selected_entrypoint: String,
    pub schema: Option<LoadedSchema>,
    /// Parameter and artifact-binding values, keyed by name. Stale keys
    /// left over from a previous entrypoint are harmless and simply unused.
    pub params: BTreeMap<String, String>,
    pub position: Position,
    /// Advisory flag set when the last schema fetch for this node failed.
    pub load_error: Option<String>,
}

impl CanvasNode {
    /// True when the cached schema matches the current entrypoint.
    pub fn schema_is_current(&self) -> bool {
        self.schema
            .as_ref()
            .is_some_and(|s| s.entrypoint_loaded == self.selected_entrypoint)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Partial node update applied through `GraphStore::update_node`.
///
/// `params` merges key-by-key into the existing mapping (absent keys are
/// preserved); every other field present in the patch replaces the node's
/// value outright. This lets "set one parameter" and "replace the schema and
/// reset defaults" go through the same primitive without clobbering each
/// other.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub selected_entrypoint: Option<String>,
    /// `Some(None)` clears the schema; `None` leaves it untouched.
    pub schema: Option<Option<LoadedSchema>>,
    pub params: Option<BTreeMap<String, String>>,
    pub load_error: Option<Option<String>>,
}

impl NodePatch {
    /// Patch setting a single parameter value.
    pub fn param(name: impl Into<String>, value: impl Into<String>) -> Self {
        NodePatch {
            params: Some(BTreeMap::from([(name.into(), value.into())])),
            ..NodePatch::default()
        }
    }
}
