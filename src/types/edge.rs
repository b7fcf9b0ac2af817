//! The edge struct stored inside an adjacency list.

use super::NodeId;

/// An outgoing edge: a weight and the handle of the destination node.
///
/// Undirected edges are stored as two mirrored entries, one in each
/// endpoint's adjacency list; `oriented` tells the two kinds apart.
#[derive(Debug, Clone, Copy)]
pub struct Edge<W> {
    target: NodeId,
    weight: W,
    oriented: bool,
}

impl<W> Edge<W> {
    pub(crate) fn new(target: NodeId, weight: W, oriented: bool) -> Self {
        Self {
            target,
            weight,
            oriented,
        }
    }

    /// Destination handle. May be expired; resolve it with `Graph::edge_target`.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// True for a one-way edge, false for half of an undirected pair.
    pub fn is_oriented(&self) -> bool {
        self.oriented
    }

    pub(crate) fn set_weight(&mut self, weight: W) {
        self.weight = weight;
    }

    pub(crate) fn set_oriented(&mut self) {
        self.oriented = true;
    }
}

impl<W: Copy> Edge<W> {
    /// Edge weight.
    pub fn weight(&self) -> W {
        self.weight
    }
}
