//! Compilation of the canvas graph into the submission payload.
//!
//! Public API: `compile(store, s3, action) -> WorkflowPayload` plus the
//! async `run` dispatch.

pub mod payload;

pub use payload::{Action, PayloadEdge, PayloadNode, RunOutcome, WorkflowPayload};

use crate::catalog::client::CatalogClient;
use crate::config::S3Config;
use crate::error::CatalogError;
use crate::graph::store::GraphStore;

/// Serialize the graph into the submission payload.
///
/// Pure function of its inputs. No validation happens here: advisory
/// issues from `validate` ride along to the backend untouched, and every
/// edge appears whether or not any binding selected it.
pub fn compile(store: &GraphStore, s3_config: &S3Config, action: Action) -> WorkflowPayload {
    WorkflowPayload {
        nodes: store
            .nodes()
            .iter()
            .map(|node| PayloadNode {
                id: node.id.clone(),
                template_name: node.template_id.clone(),
                entrypoint: node.selected_entrypoint.clone(),
                arguments: node.params.clone(),
            })
            .collect(),
        edges: store
            .edges()
            .iter()
            .map(|edge| PayloadEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect(),
        s3_config: s3_config.clone(),
        action,
    }
}

/// Compile and dispatch in one step. A failed dispatch leaves the graph
/// untouched; the caller may simply retry.
pub async fn run(
    store: &GraphStore,
    client: &CatalogClient,
    s3_config: &S3Config,
    action: Action,
) -> Result<RunOutcome, CatalogError> {
    let payload = compile(store, s3_config, action);
    client.run_workflow(&payload).await
}
