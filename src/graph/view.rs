//! petgraph-based directed view of the canvas graph.
//!
//! Built on demand from the store; edge weights record insertion order so
//! incoming scans can reproduce the order edges were drawn in.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::graph::node::NodeId;
use crate::graph::store::GraphStore;

pub struct DependencyGraph {
    graph: DiGraph<NodeId, usize>,
    indices: HashMap<NodeId, NodeIndex>,
}

impl DependencyGraph {
    pub fn build(store: &GraphStore) -> Self {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();

        for node in store.nodes() {
            let idx = graph.add_node(node.id.clone());
            indices.insert(node.id.clone(), idx);
        }

        // Store edges always reference live nodes (connect enforces it and
        // this core never destroys nodes), hence no error path here.
        for (order, edge) in store.edges().iter().enumerate() {
            if let (Some(&s), Some(&t)) = (indices.get(&edge.source), indices.get(&edge.target)) {
                graph.add_edge(s, t, order);
            }
        }

        DependencyGraph { graph, indices }
    }

    /// Sources of edges pointing at `target`, in edge insertion order.
    /// A source wired in via several edges appears once per edge.
    pub fn incoming_sources(&self, target: &NodeId) -> Vec<&NodeId> {
        let Some(&idx) = self.indices.get(target) else {
            return vec![];
        };
        let mut incoming: Vec<(usize, &NodeId)> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (*e.weight(), &self.graph[e.source()]))
            .collect();
        incoming.sort_by_key(|(order, _)| *order);
        incoming.into_iter().map(|(_, id)| id).collect()
    }

    pub fn incoming_count(&self, id: &NodeId) -> usize {
        self.indices
            .get(id)
            .map(|&idx| self.graph.edges_directed(idx, Direction::Incoming).count())
            .unwrap_or(0)
    }

    pub fn outgoing_count(&self, id: &NodeId) -> usize {
        self.indices
            .get(id)
            .map(|&idx| self.graph.edges_directed(idx, Direction::Outgoing).count())
            .unwrap_or(0)
    }
}
