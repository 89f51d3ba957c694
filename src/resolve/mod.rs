//! Schema loading and upstream-interface resolution.
//!
//! Two concerns live here: attaching a node's own (template, entrypoint)
//! schema from the cache, and computing which upstream outputs a node can
//! bind its artifact slots to, given the current edge set.

pub mod binding;

pub use binding::Binding;

use std::collections::BTreeMap;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::catalog::cache::SchemaCache;
use crate::error::ComposerError;
use crate::graph::node::{LoadedSchema, NodeId, NodePatch};
use crate::graph::store::GraphStore;
use crate::graph::view::DependencyGraph;

/// One candidate value for an artifact-input slot of a target node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOption {
    pub name: String,
    pub source_id: NodeId,
    /// Human-readable composite shown by the slot selector.
    pub label: String,
}

impl OutputOption {
    pub fn binding(&self) -> Binding {
        Binding::new(self.source_id.clone(), self.name.clone())
    }
}

/// Ensure `id`'s schema matches its selected entrypoint, fetching on demand.
///
/// No fetch is issued when the attached schema is already tagged with the
/// current entrypoint. On success the schema is applied via [`apply_schema`];
/// on failure the node keeps whatever schema it had and its `load_error`
/// records the cause — the failure is advisory, not fatal.
///
/// Returns true when a freshly fetched schema was applied.
pub async fn ensure_schema(
    store: &mut GraphStore,
    cache: &SchemaCache,
    id: &NodeId,
) -> Result<bool, ComposerError> {
    let (template, entrypoint) = {
        let node = store
            .node(id)
            .ok_or_else(|| ComposerError::UnknownNode(id.clone()))?;
        if node.schema_is_current() {
            return Ok(false);
        }
        (node.template_id.clone(), node.selected_entrypoint.clone())
    };

    match cache.resolve(&template, &entrypoint).await {
        Ok(schema) => apply_schema(
            store,
            id,
            LoadedSchema {
                parameters: schema.parameters.clone(),
                artifacts: schema.artifacts.clone(),
                entrypoint_loaded: entrypoint,
            },
        ),
        Err(err) => {
            warn!(node = %id, template = %template, entrypoint = %entrypoint, error = %err, "schema fetch failed");
            store.update_node(
                id,
                NodePatch {
                    load_error: Some(Some(err.to_string())),
                    ..NodePatch::default()
                },
            )?;
            Ok(false)
        }
    }
}

/// Attach a fetched schema to a node and apply declared defaults.
///
/// The result is discarded (returns false) when the node's selected
/// entrypoint moved on while the fetch was in flight — the tag on the
/// fetched schema no longer matches, and applying it would resurrect the
/// state the entrypoint change just cleared.
///
/// Defaults are written only for parameters with no current value;
/// explicit values are never overwritten, so re-applying the same schema
/// is idempotent.
pub fn apply_schema(
    store: &mut GraphStore,
    id: &NodeId,
    loaded: LoadedSchema,
) -> Result<bool, ComposerError> {
    let node = store
        .node(id)
        .ok_or_else(|| ComposerError::UnknownNode(id.clone()))?;

    if node.selected_entrypoint != loaded.entrypoint_loaded {
        debug!(
            node = %id,
            fetched = %loaded.entrypoint_loaded,
            current = %node.selected_entrypoint,
            "discarding schema fetched for a superseded entrypoint"
        );
        return Ok(false);
    }

    let mut defaults = BTreeMap::new();
    for param in &loaded.parameters {
        if let Some(default) = &param.default {
            if !node.params.contains_key(&param.name) {
                defaults.insert(param.name.clone(), default.clone());
            }
        }
    }

    store.update_node(
        id,
        NodePatch {
            schema: Some(Some(loaded)),
            params: Some(defaults),
            load_error: Some(None),
            ..NodePatch::default()
        },
    )?;
    Ok(true)
}

/// Candidate bindings for `target`'s artifact slots: the outputs of every
/// node wired into it by an incoming edge, in edge order.
///
/// Each source's schema is resolved at the *source's* own selected
/// entrypoint, independently of the target. All per-source fetches complete
/// before the list is assembled, so callers never observe a partial list.
/// A source whose fetch fails is logged and contributes nothing; the
/// remaining sources are unaffected. No incoming edges means no candidates.
pub async fn upstream_outputs(
    store: &GraphStore,
    cache: &SchemaCache,
    target: &NodeId,
) -> Vec<OutputOption> {
    let view = DependencyGraph::build(store);
    let sources: Vec<_> = view
        .incoming_sources(target)
        .into_iter()
        .filter_map(|id| store.node(id))
        .collect();

    if sources.is_empty() {
        return vec![];
    }

    let fetches = sources.iter().map(|node| async {
        let result = cache
            .resolve(&node.template_id, &node.selected_entrypoint)
            .await;
        (node.id.clone(), result)
    });
    let results = join_all(fetches).await;

    let mut options = Vec::new();
    for (source_id, result) in results {
        match result {
            Ok(schema) => {
                for output in &schema.outputs {
                    options.push(OutputOption {
                        name: output.name.clone(),
                        source_id: source_id.clone(),
                        label: format!("{} (from {})", output.name, source_id),
                    });
                }
            }
            Err(err) => {
                warn!(source = %source_id, error = %err, "skipping source with failed schema fetch");
            }
        }
    }
    options
}
