//! Core graph structure: owned nodes plus index-aligned adjacency lists.

use std::collections::HashMap;
use std::fmt;

use crate::types::{Edge, GraphError, GraphResult, Node, NodeId, NodeKey};

/// In-memory graph holding nodes of payload `T` and edges of weight `W`.
///
/// `nodes[i]` owns the payload and `adjacency[i]` holds the outgoing edges of
/// that same node; both vectors always have the same length. Undirected edges
/// are stored as two mirrored entries (one for a self-loop), oriented edges as
/// a single entry in the source's list.
pub struct Graph<T, W = i64> {
    /// All nodes in insertion order.
    nodes: Vec<Node<T>>,
    /// Outgoing edges, index-aligned with `nodes`.
    adjacency: Vec<Vec<Edge<W>>>,
    /// Handle -> current position in `nodes`.
    positions: HashMap<NodeId, usize>,
    /// Next handle to hand out.
    next_id: u64,
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<T, W> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            positions: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_id: 0,
        }
    }

    /// Create a graph of `count` nodes, each holding a clone of `value`.
    pub fn with_nodes(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut graph = Self::with_capacity(count);
        for _ in 0..count {
            graph.add_node(value.clone());
        }
        graph
    }

    /// Create a graph with one node per value, in iteration order.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut graph = Self::new();
        graph.add_nodes(values);
        graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True if the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of adjacency entries (a mirrored undirected pair counts twice).
    pub fn adjacency_entry_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Number of logical edges: oriented edges and self-loops once, mirrored pairs once.
    pub fn edge_count(&self) -> usize {
        let mut oriented = 0;
        let mut halves = 0;
        for (node, edges) in self.nodes.iter().zip(&self.adjacency) {
            for edge in edges {
                if edge.is_oriented() || edge.target() == node.id() {
                    oriented += 1;
                } else {
                    halves += 1;
                }
            }
        }
        oriented + halves / 2
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Handles of all nodes in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(Node::id)
    }

    /// Every adjacency entry as `(source, edge)`, in node then insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge<W>)> + '_ {
        self.nodes
            .iter()
            .zip(&self.adjacency)
            .flat_map(|(node, edges)| edges.iter().map(move |edge| (node.id(), edge)))
    }

    /// True if the handle refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Get a node by handle, or `None` if the handle has expired.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.positions.get(&id).map(|&idx| &self.nodes[idx])
    }

    /// Resolve an edge's target, or `None` if that node was removed.
    pub fn edge_target(&self, edge: &Edge<W>) -> Option<&Node<T>> {
        self.node(edge.target())
    }

    /// Add a node, returns the assigned handle.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        self.positions.insert(id, self.nodes.len());
        self.nodes.push(Node::new(id, value));
        self.adjacency.push(Vec::new());

        log::debug!("added node {} at index {}", id, self.nodes.len() - 1);
        id
    }

    /// Add one node per value, returns the handles in order.
    pub fn add_nodes(&mut self, values: impl IntoIterator<Item = T>) -> Vec<NodeId> {
        values.into_iter().map(|value| self.add_node(value)).collect()
    }

    /// Remove every edge from the graph, keeping the nodes.
    pub fn remove_all_edges(&mut self) {
        for edges in &mut self.adjacency {
            edges.clear();
        }
        for node in &mut self.nodes {
            node.clear_neighbors();
        }
        log::debug!("removed all edges of {} nodes", self.nodes.len());
    }

    /// Remove every node and edge. Handles issued so far stay expired.
    pub fn remove_all_nodes(&mut self) {
        self.remove_all_edges();
        self.nodes.clear();
        self.adjacency.clear();
        self.positions.clear();
    }

    /// Alias for [`Graph::remove_all_nodes`].
    pub fn clear(&mut self) {
        self.remove_all_nodes();
    }

    /// Move both collections out, leaving this graph empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Verify that nodes, adjacency lists, handles and neighbor caches agree.
    pub fn check_invariants(&self) -> GraphResult<()> {
        if self.adjacency.len() != self.nodes.len() {
            return Err(GraphError::InvalidIndex(format!(
                "{} adjacency lists for {} nodes",
                self.adjacency.len(),
                self.nodes.len()
            )));
        }
        if self.positions.len() != self.nodes.len() {
            return Err(GraphError::InvalidIndex(format!(
                "{} handles for {} nodes",
                self.positions.len(),
                self.nodes.len()
            )));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if self.positions.get(&node.id()) != Some(&idx) {
                return Err(GraphError::InvalidIndex(format!(
                    "node {} is not registered at index {}",
                    node.id(),
                    idx
                )));
            }
            if node.degree() != self.adjacency[idx].len() {
                return Err(GraphError::InvalidIndex(format!(
                    "node {} caches {} neighbors for {} edges",
                    node.id(),
                    node.degree(),
                    self.adjacency[idx].len()
                )));
            }
        }
        // Every undirected half must have a partner in the opposite list.
        let mut halves: HashMap<(NodeId, NodeId), isize> = HashMap::new();
        for (source, edge) in self.edges() {
            if edge.is_oriented() || edge.target() == source {
                continue;
            }
            let (key, delta) = if source < edge.target() {
                ((source, edge.target()), 1)
            } else {
                ((edge.target(), source), -1)
            };
            *halves.entry(key).or_default() += delta;
        }
        if let Some(((a, b), _)) = halves.iter().find(|&(_, &balance)| balance != 0) {
            return Err(GraphError::InvalidIndex(format!(
                "undirected edge between {} and {} is not mirrored",
                a, b
            )));
        }
        Ok(())
    }

    fn index_of_id(&self, id: NodeId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Remove every edge entering or leaving the node at `idx`.
    fn detach(&mut self, idx: usize, id: NodeId) {
        let outgoing = std::mem::take(&mut self.adjacency[idx]).len();
        self.nodes[idx].clear_neighbors();

        // Mirrors of our undirected edges and oriented edges pointing at us alike.
        let mut incoming = 0;
        for other in 0..self.adjacency.len() {
            let before = self.adjacency[other].len();
            self.adjacency[other].retain(|e| e.target() != id);
            for _ in self.adjacency[other].len()..before {
                self.nodes[other].remove_neighbor(id);
                incoming += 1;
            }
        }

        log::debug!(
            "detached node {}: {} outgoing, {} incoming entries",
            id,
            outgoing,
            incoming
        );
    }
}

impl<T: PartialEq + fmt::Debug, W> Graph<T, W> {
    /// Resolve a node key to its position in the node collection.
    ///
    /// By-value keys scan the nodes in order and return the first match.
    pub fn index_of<'k>(&self, key: impl Into<NodeKey<'k, T>>) -> GraphResult<usize>
    where
        T: 'k,
    {
        self.resolve(key.into()).map(|(idx, _)| idx)
    }

    fn resolve(&self, key: NodeKey<'_, T>) -> GraphResult<(usize, NodeId)> {
        let idx = match key {
            NodeKey::Id(id) => self.index_of_id(id),
            NodeKey::Value(value) => self.nodes.iter().position(|n| n.data() == value),
            NodeKey::Missing => return Err(GraphError::NodeIsNull(key.describe())),
        }
        .ok_or_else(|| GraphError::NodeNotFound(key.describe()))?;

        if idx >= self.nodes.len() || idx >= self.adjacency.len() {
            return Err(GraphError::InvalidIndex(format!(
                "index {} outside {} nodes / {} adjacency lists",
                idx,
                self.nodes.len(),
                self.adjacency.len()
            )));
        }
        log::trace!("resolved {} to index {}", key.describe(), idx);
        Ok((idx, self.nodes[idx].id()))
    }

    /// True if any node holds `value`.
    pub fn has_node(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// Handle of the first node (in insertion order) holding `value`.
    pub fn find_node(&self, value: &T) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.data() == value).map(Node::id)
    }

    /// Handles of every node holding `value`, in insertion order.
    pub fn all_nodes_with_value(&self, value: &T) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.data() == value)
            .map(Node::id)
            .collect()
    }

    /// Borrow a node's payload.
    pub fn node_data<'k>(&self, key: impl Into<NodeKey<'k, T>>) -> GraphResult<&T>
    where
        T: 'k,
    {
        let (idx, _) = self.resolve(key.into())?;
        Ok(self.nodes[idx].data())
    }

    /// Mutably borrow a node's payload.
    pub fn node_data_mut<'k>(&mut self, key: impl Into<NodeKey<'k, T>>) -> GraphResult<&mut T>
    where
        T: 'k,
    {
        let (idx, _) = self.resolve(key.into())?;
        Ok(self.nodes[idx].data_mut())
    }

    /// Replace a node's payload, returning the old one.
    pub fn set_node_data<'k>(&mut self, key: impl Into<NodeKey<'k, T>>, value: T) -> GraphResult<T>
    where
        T: 'k,
    {
        let (idx, _) = self.resolve(key.into())?;
        Ok(self.nodes[idx].set_data(value))
    }

    /// Live neighbors from the node's cache, expired handles filtered out.
    pub fn neighbors<'k>(&self, key: impl Into<NodeKey<'k, T>>) -> GraphResult<Vec<NodeId>>
    where
        T: 'k,
    {
        let (idx, _) = self.resolve(key.into())?;
        Ok(self.nodes[idx]
            .neighbors()
            .iter()
            .copied()
            .filter(|&n| self.contains(n))
            .collect())
    }

    /// Outgoing adjacency list of a node.
    pub fn edges_of<'k>(&self, key: impl Into<NodeKey<'k, T>>) -> GraphResult<&[Edge<W>]>
    where
        T: 'k,
    {
        let (idx, _) = self.resolve(key.into())?;
        Ok(&self.adjacency[idx])
    }

    /// Number of entries in a node's adjacency list. A self-loop counts once.
    pub fn edge_count_of_node<'k>(&self, key: impl Into<NodeKey<'k, T>>) -> GraphResult<usize>
    where
        T: 'k,
    {
        Ok(self.edges_of(key)?.len())
    }

    /// Remove the first node matching `key` together with every edge touching it.
    pub fn remove_node<'k>(&mut self, key: impl Into<NodeKey<'k, T>>) -> GraphResult<T>
    where
        T: 'k,
    {
        let (idx, id) = self.resolve(key.into())?;
        self.detach(idx, id);

        let node = self.nodes.remove(idx);
        self.adjacency.remove(idx);
        self.positions.remove(&id);
        for (pos, shifted) in self.nodes.iter().enumerate().skip(idx) {
            self.positions.insert(shifted.id(), pos);
        }

        log::debug!("removed node {} from index {}", id, idx);
        Ok(node.into_data())
    }

    /// Remove every node holding `value`. Returns how many were removed.
    pub fn remove_all_nodes_with_value(&mut self, value: &T) -> usize {
        let mut removed = 0;
        while let Some(id) = self.find_node(value) {
            if self.remove_node(id).is_err() {
                break;
            }
            removed += 1;
        }
        removed
    }

    /// Clear a node's adjacency list and neighbor cache, removing the reverse
    /// entry of each outgoing edge along with it.
    ///
    /// An undirected edge loses its mirror; an oriented `n -> t` edge takes
    /// the first oriented `t -> n` edge with it. Other incoming oriented edges
    /// are kept, which is what separates this from [`Graph::remove_node`].
    pub fn remove_all_edges_of_node<'k>(
        &mut self,
        key: impl Into<NodeKey<'k, T>>,
    ) -> GraphResult<()>
    where
        T: 'k,
    {
        let (idx, id) = self.resolve(key.into())?;
        let outgoing = std::mem::take(&mut self.adjacency[idx]);
        self.nodes[idx].clear_neighbors();

        let mut reverse = 0;
        for edge in &outgoing {
            if edge.target() == id {
                continue;
            }
            let Some(other) = self.index_of_id(edge.target()) else {
                continue;
            };
            let oriented = edge.is_oriented();
            let pos = self.adjacency[other]
                .iter()
                .position(|e| e.is_oriented() == oriented && e.target() == id);
            if let Some(pos) = pos {
                self.adjacency[other].remove(pos);
                self.nodes[other].remove_neighbor(id);
                reverse += 1;
            }
        }

        log::debug!(
            "cleared {} edges of node {} and {} reverse entries",
            outgoing.len(),
            id,
            reverse
        );
        Ok(())
    }
}

impl<T: PartialEq + fmt::Debug, W: Copy + PartialEq> Graph<T, W> {
    fn position_of_edge(&self, from: usize, to: NodeId, weight: Option<W>) -> Option<usize> {
        self.adjacency[from]
            .iter()
            .position(|e| e.target() == to && weight.map_or(true, |w| e.weight() == w))
    }

    fn position_of_mirror(&self, from: usize, to: NodeId) -> Option<usize> {
        self.adjacency[from]
            .iter()
            .position(|e| !e.is_oriented() && e.target() == to)
    }

    /// Add an undirected edge: `u -> v` and, unless it is a self-loop, `v -> u`.
    pub fn add_edge<'k>(
        &mut self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: W,
    ) -> GraphResult<()>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (iv, idv) = self.resolve(v.into())?;

        self.adjacency[iu].push(Edge::new(idv, weight, false));
        self.nodes[iu].add_neighbor(idv);
        if iu != iv {
            self.adjacency[iv].push(Edge::new(idu, weight, false));
            self.nodes[iv].add_neighbor(idu);
        }

        log::debug!("added edge {} -- {}", idu, idv);
        Ok(())
    }

    /// Add a directed edge `u -> v`.
    pub fn add_edge_oriented<'k>(
        &mut self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: W,
    ) -> GraphResult<()>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (_, idv) = self.resolve(v.into())?;

        self.adjacency[iu].push(Edge::new(idv, weight, true));
        self.nodes[iu].add_neighbor(idv);

        log::debug!("added edge {} -> {}", idu, idv);
        Ok(())
    }

    /// Remove the first `u -> v` edge and, if it was undirected, its `v -> u` mirror.
    pub fn remove_edge<'k>(
        &mut self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
    ) -> GraphResult<()>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (iv, idv) = self.resolve(v.into())?;

        let pos = self
            .position_of_edge(iu, idv, None)
            .ok_or_else(|| GraphError::EdgeNotFound(format!("{} -> {}", idu, idv)))?;

        let mirror = if !self.adjacency[iu][pos].is_oriented() && iu != iv {
            let mirror = self.position_of_mirror(iv, idu).ok_or_else(|| {
                GraphError::InvalidIndex(format!("edge {} -- {} has no mirror", idu, idv))
            })?;
            Some(mirror)
        } else {
            None
        };

        self.adjacency[iu].remove(pos);
        self.nodes[iu].remove_neighbor(idv);
        if let Some(mirror) = mirror {
            self.adjacency[iv].remove(mirror);
            self.nodes[iv].remove_neighbor(idu);
        }

        log::debug!("removed edge {} -- {}", idu, idv);
        Ok(())
    }

    /// Remove only the first `u -> v` entry.
    ///
    /// If that entry was half of an undirected edge, the surviving `v -> u`
    /// half becomes an oriented edge.
    pub fn remove_edge_oriented<'k>(
        &mut self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
    ) -> GraphResult<()>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (iv, idv) = self.resolve(v.into())?;

        let pos = self
            .position_of_edge(iu, idv, None)
            .ok_or_else(|| GraphError::EdgeNotFound(format!("{} -> {}", idu, idv)))?;

        let removed = self.adjacency[iu].remove(pos);
        self.nodes[iu].remove_neighbor(idv);
        if !removed.is_oriented() && iu != iv {
            if let Some(mirror) = self.position_of_mirror(iv, idu) {
                self.adjacency[iv][mirror].set_oriented();
            }
        }

        log::debug!("removed edge {} -> {}", idu, idv);
        Ok(())
    }

    /// First `u -> v` edge; with `compare_weight` only an edge of that weight qualifies.
    pub fn find_edge_oriented<'k>(
        &self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: W,
        compare_weight: bool,
    ) -> GraphResult<Option<&Edge<W>>>
    where
        T: 'k,
    {
        let (iu, _) = self.resolve(u.into())?;
        let (_, idv) = self.resolve(v.into())?;
        let weight = compare_weight.then_some(weight);
        Ok(self
            .position_of_edge(iu, idv, weight)
            .map(|pos| &self.adjacency[iu][pos]))
    }

    /// The first `u -> v` match followed by the first `v -> u` match.
    ///
    /// A self-loop yields at most one edge; a complete undirected edge yields two.
    pub fn find_edge<'k>(
        &self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: W,
        compare_weight: bool,
    ) -> GraphResult<Vec<&Edge<W>>>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (iv, idv) = self.resolve(v.into())?;
        let weight = compare_weight.then_some(weight);

        let mut found = Vec::with_capacity(2);
        if let Some(pos) = self.position_of_edge(iu, idv, weight) {
            found.push(&self.adjacency[iu][pos]);
        }
        if iu != iv {
            if let Some(pos) = self.position_of_edge(iv, idu, weight) {
                found.push(&self.adjacency[iv][pos]);
            }
        }
        Ok(found)
    }

    /// True if a `u -> v` edge exists (of the given weight, if any).
    pub fn has_edge_oriented<'k>(
        &self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: Option<W>,
    ) -> GraphResult<bool>
    where
        T: 'k,
    {
        let (iu, _) = self.resolve(u.into())?;
        let (_, idv) = self.resolve(v.into())?;
        Ok(self.position_of_edge(iu, idv, weight).is_some())
    }

    /// True if edges exist in both directions between `u` and `v`.
    pub fn has_edge<'k>(
        &self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: Option<W>,
    ) -> GraphResult<bool>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (iv, idv) = self.resolve(v.into())?;
        Ok(self.position_of_edge(iu, idv, weight).is_some()
            && self.position_of_edge(iv, idu, weight).is_some())
    }

    /// Weight of the first `u -> v` edge.
    pub fn edge_weight_oriented<'k>(
        &self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
    ) -> GraphResult<W>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (_, idv) = self.resolve(v.into())?;
        self.position_of_edge(iu, idv, None)
            .map(|pos| self.adjacency[iu][pos].weight())
            .ok_or_else(|| GraphError::EdgeNotFound(format!("{} -> {}", idu, idv)))
    }

    /// Weight of the undirected edge between `u` and `v`; both directions must exist.
    pub fn edge_weight<'k>(
        &self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
    ) -> GraphResult<W>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (iv, idv) = self.resolve(v.into())?;
        match (
            self.position_of_edge(iu, idv, None),
            self.position_of_edge(iv, idu, None),
        ) {
            (Some(pos), Some(_)) => Ok(self.adjacency[iu][pos].weight()),
            _ => Err(GraphError::EdgeNotFound(format!("{} -- {}", idu, idv))),
        }
    }

    /// Set the weight of both halves of the undirected edge between `u` and `v`.
    ///
    /// Fails without touching anything if either half is missing.
    pub fn set_edge_weight<'k>(
        &mut self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: W,
    ) -> GraphResult<()>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (iv, idv) = self.resolve(v.into())?;

        let missing = || GraphError::EdgeNotFound(format!("{} -- {}", idu, idv));
        let forward = self.position_of_edge(iu, idv, None).ok_or_else(missing)?;
        let backward = if iu == iv {
            None
        } else if self.adjacency[iu][forward].is_oriented() {
            let pos = self.adjacency[iv]
                .iter()
                .position(|e| e.is_oriented() && e.target() == idu);
            Some(pos.ok_or_else(missing)?)
        } else {
            Some(self.position_of_mirror(iv, idu).ok_or_else(missing)?)
        };

        self.adjacency[iu][forward].set_weight(weight);
        if let Some(backward) = backward {
            self.adjacency[iv][backward].set_weight(weight);
        }
        Ok(())
    }

    /// Set the weight of the first `u -> v` edge only.
    pub fn set_edge_oriented_weight<'k>(
        &mut self,
        u: impl Into<NodeKey<'k, T>>,
        v: impl Into<NodeKey<'k, T>>,
        weight: W,
    ) -> GraphResult<()>
    where
        T: 'k,
    {
        let (iu, idu) = self.resolve(u.into())?;
        let (_, idv) = self.resolve(v.into())?;
        let pos = self
            .position_of_edge(iu, idv, None)
            .ok_or_else(|| GraphError::EdgeNotFound(format!("{} -> {}", idu, idv)))?;
        self.adjacency[iu][pos].set_weight(weight);
        Ok(())
    }

    /// Edge equality: targets resolve to equal payloads and weights match.
    ///
    /// An edge whose target was removed is never equal to anything.
    pub fn edges_equal(&self, a: &Edge<W>, b: &Edge<W>) -> bool {
        match (self.edge_target(a), self.edge_target(b)) {
            (Some(x), Some(y)) => x == y && a.weight() == b.weight(),
            _ => false,
        }
    }
}

impl<T, W: Copy + PartialEq + Default> Graph<T, W> {
    /// True if any edge carries a weight other than `W::default()`.
    pub fn is_weighted(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .any(|e| e.weight() != W::default())
    }
}

/// Deep copy: fresh nodes with cloned payloads, edges copied by handle, and
/// neighbor caches rebuilt from the copied adjacency lists.
impl<T: Clone, W: Copy> Clone for Graph<T, W> {
    fn clone(&self) -> Self {
        let mut nodes: Vec<Node<T>> = self
            .nodes
            .iter()
            .map(|n| Node::new(n.id(), n.data().clone()))
            .collect();
        let adjacency: Vec<Vec<Edge<W>>> = self
            .adjacency
            .iter()
            .map(|edges| {
                edges
                    .iter()
                    .filter(|e| self.positions.contains_key(&e.target()))
                    .copied()
                    .collect()
            })
            .collect();
        for (node, edges) in nodes.iter_mut().zip(&adjacency) {
            for edge in edges {
                node.add_neighbor(edge.target());
            }
        }

        Self {
            nodes,
            adjacency,
            positions: self.positions.clone(),
            next_id: self.next_id,
        }
    }
}

impl<T, W> FromIterator<T> for Graph<T, W> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for Graph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}
