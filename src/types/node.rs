//! The node struct: a payload plus a cache of adjacent node handles.

use super::NodeId;

/// A graph node owned by its `Graph`.
///
/// The neighbor list is a cache kept in step with the graph's adjacency
/// lists; entries are handles, so they never keep a removed node alive.
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: NodeId,
    data: T,
    neighbors: Vec<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, data: T) -> Self {
        Self {
            id,
            data,
            neighbors: Vec::new(),
        }
    }

    /// Handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Borrow the payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutably borrow the payload.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replace the payload, returning the old one.
    pub fn set_data(&mut self, data: T) -> T {
        std::mem::replace(&mut self.data, data)
    }

    /// Number of entries in the neighbor cache.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Raw neighbor cache, possibly holding expired handles.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub(crate) fn add_neighbor(&mut self, id: NodeId) {
        self.neighbors.push(id);
    }

    /// Drop the first cache entry for `id`. Returns whether one was found.
    pub(crate) fn remove_neighbor(&mut self, id: NodeId) -> bool {
        match self.neighbors.iter().position(|&n| n == id) {
            Some(pos) => {
                self.neighbors.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }

    pub(crate) fn into_data(self) -> T {
        self.data
    }
}

/// Nodes compare by payload only.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
