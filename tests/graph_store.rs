//! Integration tests for the node/edge store: creation, merge updates,
//! entrypoint changes, selection.

mod helpers;

use composer::catalog::types::TemplateSummary;
use composer::graph::node::{LoadedSchema, NodeId, NodePatch, Position};
use composer::graph::store::GraphStore;

use helpers::template;

#[test]
fn node_creation_starts_unloaded_with_unique_ids() {
    let mut store = GraphStore::new();
    let a = store.add_node(&template("loader", &["load"]), Position { x: 10.0, y: 20.0 });
    let b = store.add_node(&template("loader", &["load"]), Position::default());

    assert_ne!(a, b);
    let node = store.node(&a).unwrap();
    assert_eq!(node.template_id, "loader");
    assert_eq!(node.selected_entrypoint, "load");
    assert!(node.schema.is_none());
    assert!(node.params.is_empty());
    assert_eq!(node.position.x, 10.0);
}

#[test]
fn node_from_drop_payload() {
    let json = r#"{"name":"trainer","entrypoints":["train","eval"],"default_entrypoint":"train"}"#;
    let summary = TemplateSummary::from_drop_payload(json).unwrap();

    let mut store = GraphStore::new();
    let id = store.add_node(&summary, Position::default());
    let node = store.node(&id).unwrap();
    assert_eq!(node.entrypoints, vec!["train", "eval"]);
    assert_eq!(node.selected_entrypoint, "train");
}

#[test]
fn default_entrypoint_falls_back_to_first() {
    let summary = TemplateSummary {
        name: "t".into(),
        entrypoints: vec!["fit".into(), "transform".into()],
        default_entrypoint: None,
    };
    let mut store = GraphStore::new();
    let id = store.add_node(&summary, Position::default());
    assert_eq!(store.node(&id).unwrap().selected_entrypoint, "fit");
}

#[test]
fn params_merge_key_by_key() {
    let mut store = GraphStore::new();
    let id = store.add_node(&template("t", &["main"]), Position::default());

    store.update_node(&id, NodePatch::param("a", "1")).unwrap();
    store.update_node(&id, NodePatch::param("b", "2")).unwrap();
    let node = store.node(&id).unwrap();
    assert_eq!(node.param("a"), Some("1"));
    assert_eq!(node.param("b"), Some("2"));

    // overwrite one key, preserve the other
    store.update_node(&id, NodePatch::param("a", "3")).unwrap();
    let node = store.node(&id).unwrap();
    assert_eq!(node.param("a"), Some("3"));
    assert_eq!(node.param("b"), Some("2"));
}

#[test]
fn patch_without_params_leaves_params_untouched() {
    let mut store = GraphStore::new();
    let id = store.add_node(&template("t", &["main"]), Position::default());
    store.update_node(&id, NodePatch::param("a", "1")).unwrap();

    store
        .update_node(
            &id,
            NodePatch {
                schema: Some(Some(LoadedSchema {
                    parameters: vec![],
                    artifacts: vec![],
                    entrypoint_loaded: "main".into(),
                })),
                ..NodePatch::default()
            },
        )
        .unwrap();

    assert_eq!(store.node(&id).unwrap().param("a"), Some("1"));
}

#[test]
fn set_entrypoint_requires_membership_and_clears_schema() {
    let mut store = GraphStore::new();
    let id = store.add_node(&template("t", &["fit", "transform"]), Position::default());

    store
        .update_node(
            &id,
            NodePatch {
                schema: Some(Some(LoadedSchema {
                    parameters: vec![],
                    artifacts: vec![],
                    entrypoint_loaded: "fit".into(),
                })),
                ..NodePatch::default()
            },
        )
        .unwrap();
    assert!(store.node(&id).unwrap().schema_is_current());

    // unknown entrypoint is rejected, state untouched
    let err = store.set_entrypoint(&id, "predict").unwrap_err();
    assert!(err.to_string().contains("not offered"));
    assert_eq!(store.node(&id).unwrap().selected_entrypoint, "fit");
    assert!(store.node(&id).unwrap().schema.is_some());

    // valid change clears the schema in the same mutation
    store.set_entrypoint(&id, "transform").unwrap();
    let node = store.node(&id).unwrap();
    assert_eq!(node.selected_entrypoint, "transform");
    assert!(node.schema.is_none());
    assert!(node.entrypoints.contains(&node.selected_entrypoint));
}

#[test]
fn connect_rejects_unknown_endpoints_but_allows_duplicates_and_self_loops() {
    let mut store = GraphStore::new();
    let a = store.add_node(&template("a", &["main"]), Position::default());
    let b = store.add_node(&template("b", &["main"]), Position::default());

    assert!(store.connect(&a, &NodeId::from("ghost")).is_err());
    assert!(store.edges().is_empty());

    store.connect(&a, &b).unwrap();
    store.connect(&a, &b).unwrap();
    store.connect(&a, &a).unwrap();
    assert_eq!(store.edges().len(), 3);
}

#[test]
fn disconnect_removes_one_edge_and_leaves_params_alone() {
    let mut store = GraphStore::new();
    let a = store.add_node(&template("a", &["main"]), Position::default());
    let b = store.add_node(&template("b", &["main"]), Position::default());
    store.connect(&a, &b).unwrap();
    store.connect(&a, &b).unwrap();

    store
        .update_node(&b, NodePatch::param("input", format!("{a}::dataset")))
        .unwrap();

    store.disconnect(&a, &b);
    assert_eq!(store.edges().len(), 1);
    store.disconnect(&a, &b);
    assert!(store.edges().is_empty());

    // the recorded binding stays, now stale
    assert_eq!(
        store.node(&b).unwrap().param("input"),
        Some(format!("{a}::dataset").as_str())
    );
}

#[test]
fn selection_is_single_and_clearable() {
    let mut store = GraphStore::new();
    let a = store.add_node(&template("a", &["main"]), Position::default());
    let b = store.add_node(&template("b", &["main"]), Position::default());

    assert!(store.selected_id().is_none());
    store.select(&a).unwrap();
    assert_eq!(store.selected_id(), Some(&a));

    store.select(&b).unwrap();
    assert_eq!(store.selected_id(), Some(&b));
    assert_eq!(store.selection().unwrap().id, b);

    store.clear_selection();
    assert!(store.selection().is_none());

    assert!(store.select(&NodeId::from("ghost")).is_err());
}
