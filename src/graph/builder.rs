//! Fluent API for building Graph instances.

use std::fmt;

use crate::types::{GraphError, GraphResult, NodeId, DEFAULT_CAPACITY};

use super::Graph;

/// A link recorded by position, resolved when the graph is built.
struct PendingLink<W> {
    from: usize,
    to: usize,
    weight: W,
    oriented: bool,
}

/// Fluent builder for constructing a Graph.
///
/// Nodes are referred to by the position returned from [`GraphBuilder::add_node`],
/// so duplicate payloads can be linked unambiguously.
pub struct GraphBuilder<T, W = i64> {
    nodes: Vec<T>,
    links: Vec<PendingLink<W>>,
}

impl<T, W> Default for GraphBuilder<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> GraphBuilder<T, W> {
    /// Create a new builder with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new builder with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            links: Vec::new(),
        }
    }

    /// Add a node, returns its position.
    pub fn add_node(&mut self, value: T) -> usize {
        self.nodes.push(value);
        self.nodes.len() - 1
    }

    /// Add an undirected edge between two positions.
    pub fn link(&mut self, from: usize, to: usize, weight: W) -> &mut Self {
        self.links.push(PendingLink {
            from,
            to,
            weight,
            oriented: false,
        });
        self
    }

    /// Add a directed edge between two positions.
    pub fn link_oriented(&mut self, from: usize, to: usize, weight: W) -> &mut Self {
        self.links.push(PendingLink {
            from,
            to,
            weight,
            oriented: true,
        });
        self
    }

    /// Number of nodes added so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<T: PartialEq + fmt::Debug, W: Copy + PartialEq> GraphBuilder<T, W> {
    /// Build the graph. Fails with `InvalidIndex` if a link names an unknown position.
    pub fn build(self) -> GraphResult<Graph<T, W>> {
        if let Some(bad) = self
            .links
            .iter()
            .find(|l| l.from >= self.nodes.len() || l.to >= self.nodes.len())
        {
            return Err(GraphError::InvalidIndex(format!(
                "link {} -> {} with only {} nodes",
                bad.from,
                bad.to,
                self.nodes.len()
            )));
        }

        let mut graph = Graph::with_capacity(self.nodes.len());
        let ids: Vec<NodeId> = graph.add_nodes(self.nodes);
        for link in self.links {
            if link.oriented {
                graph.add_edge_oriented(ids[link.from], ids[link.to], link.weight)?;
            } else {
                graph.add_edge(ids[link.from], ids[link.to], link.weight)?;
            }
        }
        Ok(graph)
    }
}
