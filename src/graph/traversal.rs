//! Read-only graph algorithms built on the public query surface.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::ops::Add;

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Live outgoing targets of every node, keyed by handle.
fn successors<T, W>(graph: &Graph<T, W>) -> HashMap<NodeId, Vec<NodeId>> {
    let mut map: HashMap<NodeId, Vec<NodeId>> =
        graph.node_ids().map(|id| (id, Vec::new())).collect();
    for (source, edge) in graph.edges() {
        if graph.contains(edge.target()) {
            map.entry(source).or_default().push(edge.target());
        }
    }
    map
}

/// Same as `successors`, with every edge also followed backwards.
fn undirected_neighbors<T, W>(graph: &Graph<T, W>) -> HashMap<NodeId, Vec<NodeId>> {
    let mut map = successors(graph);
    let reversed: Vec<(NodeId, NodeId)> = map
        .iter()
        .flat_map(|(&source, targets)| targets.iter().map(move |&t| (t, source)))
        .collect();
    for (from, to) in reversed {
        map.entry(from).or_default().push(to);
    }
    map
}

/// Breadth-first order of the nodes reachable from `start` along outgoing edges.
pub fn bfs_order<T, W>(graph: &Graph<T, W>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    if !graph.contains(start) {
        return Err(GraphError::NodeNotFound(format!("handle {}", start)));
    }

    let adjacency = successors(graph);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in adjacency.get(&current).into_iter().flatten() {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    Ok(order)
}

/// Groups of nodes connected by edges in either direction.
///
/// Components are ordered by their earliest node, members by insertion order.
pub fn connected_components<T, W>(graph: &Graph<T, W>) -> Vec<Vec<NodeId>> {
    let adjacency = undirected_neighbors(graph);
    let mut label: HashMap<NodeId, usize> = HashMap::new();
    let mut count = 0;

    for id in graph.node_ids() {
        if label.contains_key(&id) {
            continue;
        }
        let mut queue = VecDeque::from([id]);
        label.insert(id, count);
        while let Some(current) = queue.pop_front() {
            for &next in adjacency.get(&current).into_iter().flatten() {
                if !label.contains_key(&next) {
                    label.insert(next, count);
                    queue.push_back(next);
                }
            }
        }
        count += 1;
    }

    let mut components: Vec<Vec<NodeId>> = vec![Vec::new(); count];
    for id in graph.node_ids() {
        components[label[&id]].push(id);
    }
    components
}

/// True if every node can reach every other ignoring edge direction.
/// The empty graph counts as connected.
pub fn is_connected<T, W>(graph: &Graph<T, W>) -> bool {
    connected_components(graph).len() <= 1
}

/// Topological order over all edges (Kahn's algorithm).
///
/// An undirected edge counts as arcs both ways, so it forms a cycle.
pub fn topological_order<T, W>(graph: &Graph<T, W>) -> GraphResult<Vec<NodeId>> {
    let adjacency = successors(graph);
    let mut in_degree: HashMap<NodeId, usize> = graph.node_ids().map(|id| (id, 0)).collect();
    for targets in adjacency.values() {
        for target in targets {
            *in_degree.entry(*target).or_default() += 1;
        }
    }

    let mut queue: VecDeque<NodeId> = graph
        .node_ids()
        .filter(|id| in_degree[id] == 0)
        .collect();
    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(current) = queue.pop_front() {
        order.push(current);
        for target in adjacency.get(&current).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(target) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(*target);
                }
            }
        }
    }

    if order.len() != graph.node_count() {
        return Err(GraphError::CycleDetected(format!(
            "{} of {} nodes lie on or behind a cycle",
            graph.node_count() - order.len(),
            graph.node_count()
        )));
    }
    Ok(order)
}

/// Fewest-hops path from `from` to `to`, or `None` if unreachable.
///
/// Hop counts ignore weights, so weighted graphs are rejected.
pub fn hop_path<T, W>(
    graph: &Graph<T, W>,
    from: NodeId,
    to: NodeId,
) -> GraphResult<Option<Vec<NodeId>>>
where
    W: Copy + PartialEq + Default,
{
    if graph.is_weighted() {
        return Err(GraphError::WeightedGraph(
            "hop paths ignore weights; use shortest_path".to_string(),
        ));
    }
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(GraphError::NodeNotFound(format!("handle {}", id)));
        }
    }

    let adjacency = successors(graph);
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(current) = queue.pop_front() {
        if current == to {
            return Ok(Some(unwind(&parent, from, to)));
        }
        for &next in adjacency.get(&current).into_iter().flatten() {
            if visited.insert(next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    Ok(None)
}

/// Cheapest path from `from` to `to` by summed edge weight (Dijkstra).
///
/// Returns the total cost and the path, or `None` if unreachable. Weights
/// are assumed non-negative. Graphs without any weights are rejected.
pub fn shortest_path<T, W>(
    graph: &Graph<T, W>,
    from: NodeId,
    to: NodeId,
) -> GraphResult<Option<(W, Vec<NodeId>)>>
where
    T: PartialEq + Debug,
    W: Copy + PartialEq + PartialOrd + Default + Add<Output = W>,
{
    if !graph.is_weighted() {
        return Err(GraphError::UnweightedGraph(
            "every edge has the default weight; use hop_path".to_string(),
        ));
    }
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(GraphError::NodeNotFound(format!("handle {}", id)));
        }
    }

    let mut dist: HashMap<NodeId, W> = HashMap::from([(from, W::default())]);
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut done: HashSet<NodeId> = HashSet::new();

    loop {
        // Linear selection keeps the bound at PartialOrd; ties go to the
        // earliest node so equal-cost paths come out the same every run.
        let next = graph
            .node_ids()
            .filter(|id| !done.contains(id))
            .filter_map(|id| dist.get(&id).map(|&d| (id, d)))
            .fold(None, |best: Option<(NodeId, W)>, (id, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((id, d)),
            });
        let Some((current, cost)) = next else {
            return Ok(None);
        };
        if current == to {
            return Ok(Some((cost, unwind(&parent, from, to))));
        }
        done.insert(current);

        for edge in graph.edges_of(current)? {
            let target = edge.target();
            if !graph.contains(target) || done.contains(&target) {
                continue;
            }
            let candidate = cost + edge.weight();
            let better = dist.get(&target).map_or(true, |&known| candidate < known);
            if better {
                dist.insert(target, candidate);
                parent.insert(target, current);
            }
        }
    }
}

fn unwind(parent: &HashMap<NodeId, NodeId>, from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
