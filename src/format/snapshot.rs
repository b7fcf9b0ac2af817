//! Serializable picture of a graph: payloads in order, edges by position.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphBuilder};
use crate::types::{Edge, GraphError, GraphResult, NodeId, FORMAT_VERSION};

/// One logical edge. An undirected edge appears once, not per mirrored half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<W> {
    /// Position of the source node.
    pub from: usize,
    /// Position of the target node.
    pub to: usize,
    /// Edge weight.
    pub weight: W,
    /// Directed edge if true, undirected otherwise.
    #[serde(default)]
    pub oriented: bool,
}

/// Document written by `GraphWriter` and read by `GraphReader`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<T, W> {
    /// Document version, currently [`FORMAT_VERSION`].
    pub version: u32,
    /// Node payloads in insertion order.
    pub nodes: Vec<T>,
    /// Logical edges, in replay order.
    pub edges: Vec<EdgeRecord<W>>,
}

impl<T: Clone, W: Copy> GraphSnapshot<T, W> {
    /// Capture a graph through its query surface.
    ///
    /// Edges are listed in an order that, replayed through `add_edge` and
    /// `add_edge_oriented`, rebuilds every adjacency list in its current
    /// order, so first-match lookups answer the same after a reload.
    pub fn from_graph(graph: &Graph<T, W>) -> Self {
        let positions: HashMap<NodeId, usize> = graph
            .node_ids()
            .enumerate()
            .map(|(pos, id)| (id, pos))
            .collect();

        // Remaining entries of each adjacency list, as (target position, edge).
        let mut lists: Vec<VecDeque<(usize, &Edge<W>)>> = vec![VecDeque::new(); positions.len()];
        for (source, edge) in graph.edges() {
            let (Some(&from), Some(&to)) = (positions.get(&source), positions.get(&edge.target()))
            else {
                log::warn!("skipping edge {} -> {} with expired target", source, edge.target());
                continue;
            };
            lists[from].push_back((to, edge));
        }

        let mut edges = Vec::with_capacity(graph.edge_count());
        loop {
            let mut progressed = false;
            for from in 0..lists.len() {
                while let Some(&(to, edge)) = lists[from].front() {
                    // An undirected half goes out together with its mirror,
                    // which must then be next in the other list as well.
                    if !edge.is_oriented() && to != from {
                        let paired = matches!(
                            lists[to].front(),
                            Some(&(back, mirror)) if back == from && !mirror.is_oriented()
                        );
                        if !paired {
                            break;
                        }
                        lists[to].pop_front();
                    }
                    lists[from].pop_front();
                    edges.push(EdgeRecord {
                        from,
                        to,
                        weight: edge.weight(),
                        oriented: edge.is_oriented(),
                    });
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }

        // Only reachable if the mirror pairing was broken; keep the edges anyway.
        for (from, list) in lists.iter().enumerate() {
            for &(to, edge) in list {
                if !edge.is_oriented() && from > to {
                    continue;
                }
                log::warn!("edge {} -> {} written out of insertion order", from, to);
                edges.push(EdgeRecord {
                    from,
                    to,
                    weight: edge.weight(),
                    oriented: edge.is_oriented(),
                });
            }
        }

        Self {
            version: FORMAT_VERSION,
            nodes: graph.nodes().iter().map(|n| n.data().clone()).collect(),
            edges,
        }
    }
}

impl<T: PartialEq + fmt::Debug, W: Copy + PartialEq> GraphSnapshot<T, W> {
    /// Rebuild a graph with `add_node` / `add_edge` calls.
    pub fn into_graph(self) -> GraphResult<Graph<T, W>> {
        if self.version != FORMAT_VERSION {
            return Err(GraphError::Parse(format!(
                "unsupported format version {}",
                self.version
            )));
        }
        if let Some(bad) = self
            .edges
            .iter()
            .find(|e| e.from >= self.nodes.len() || e.to >= self.nodes.len())
        {
            log::warn!("edge {} -> {} names a missing node", bad.from, bad.to);
            return Err(GraphError::Parse(format!(
                "edge {} -> {} outside {} nodes",
                bad.from,
                bad.to,
                self.nodes.len()
            )));
        }

        let mut builder = GraphBuilder::with_capacity(self.nodes.len());
        for node in self.nodes {
            builder.add_node(node);
        }
        for edge in self.edges {
            if edge.oriented {
                builder.link_oriented(edge.from, edge.to, edge.weight);
            } else {
                builder.link(edge.from, edge.to, edge.weight);
            }
        }
        builder.build()
    }
}
