//! In-memory graph container, builder and algorithms.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use traversal::{
    bfs_order, connected_components, hop_path, is_connected, shortest_path, topological_order,
};
