//! adjgraph: a generic in-memory graph container.
//!
//! Nodes carry an arbitrary payload and edges an optional weight. Each node's
//! outgoing edges live in an adjacency list kept index-aligned with the node
//! collection; undirected edges are mirrored across both endpoints. Nodes are
//! addressed by opaque [`NodeId`] handles or, with first-match semantics, by
//! payload value.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeRecord, GraphReader, GraphSnapshot, GraphWriter};
pub use graph::{
    bfs_order, connected_components, hop_path, is_connected, shortest_path, topological_order,
    Graph, GraphBuilder,
};
pub use types::{
    Edge, ErrorKind, GraphError, GraphResult, Node, NodeId, NodeKey, DEFAULT_CAPACITY,
    FORMAT_VERSION,
};
