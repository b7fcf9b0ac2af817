//! Node handles and the ways an operation can name a node.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a node, assigned at insertion and never reused by the same graph.
///
/// A handle outlives its node: once the node is removed the handle is expired
/// and every lookup through it reports the node as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Raw value of the handle.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an operation names a node.
///
/// `Value` resolves by payload equality and picks the first match in node
/// order, so graphs holding duplicate payloads address only the earliest one
/// that way. `Missing` is what `Graph::find_node` yields for an absent value;
/// passing it anywhere fails with `NodeIsNull`.
#[derive(Debug)]
pub enum NodeKey<'a, T> {
    /// Exact node by handle.
    Id(NodeId),
    /// First node whose payload equals the value.
    Value(&'a T),
    /// No node at all.
    Missing,
}

impl<T> Clone for NodeKey<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeKey<'_, T> {}

impl<T> From<NodeId> for NodeKey<'_, T> {
    fn from(id: NodeId) -> Self {
        Self::Id(id)
    }
}

impl<T> From<Option<NodeId>> for NodeKey<'_, T> {
    fn from(id: Option<NodeId>) -> Self {
        match id {
            Some(id) => Self::Id(id),
            None => Self::Missing,
        }
    }
}

impl<'a, T> From<&'a T> for NodeKey<'a, T> {
    fn from(value: &'a T) -> Self {
        Self::Value(value)
    }
}

impl<T: fmt::Debug> NodeKey<'_, T> {
    /// Short description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Id(id) => format!("handle {}", id),
            Self::Value(value) => format!("value {:?}", value),
            Self::Missing => "missing handle".to_string(),
        }
    }
}
