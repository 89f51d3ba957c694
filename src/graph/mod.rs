//! Canvas graph data model: nodes, edges, selection, dependency view.

pub mod node;
pub mod store;
pub mod view;

pub use node::{CanvasNode, LoadedSchema, NodeId, NodePatch, Position};
pub use store::{Edge, GraphStore};
pub use view::DependencyGraph;
