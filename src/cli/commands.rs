//! CLI command implementations.
//!
//! The CLI works on graphs of string payloads and integer weights stored as
//! JSON files. Nodes are named by payload, so duplicate names address the
//! earliest node holding that name.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::{connected_components, hop_path, shortest_path, Graph};
use crate::types::{GraphError, GraphResult, NodeId};

/// Graph type handled by the CLI.
pub type CliGraph = Graph<String, i64>;

fn load(path: &Path) -> GraphResult<CliGraph> {
    GraphReader::read_from_file(path)
}

fn save(graph: &CliGraph, path: &Path) -> GraphResult<()> {
    GraphWriter::pretty().write_to_file(graph, path)
}

fn lookup(graph: &CliGraph, name: &str) -> GraphResult<NodeId> {
    graph
        .find_node(&name.to_string())
        .ok_or_else(|| GraphError::NodeNotFound(format!("no node named {:?}", name)))
}

fn names(graph: &CliGraph, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| graph.node(id))
        .map(|n| n.data().clone())
        .collect()
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Create a new empty graph file.
pub fn cmd_create(path: &Path) -> GraphResult<()> {
    save(&CliGraph::new(), path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let components = connected_components(&graph).len();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "adjacency_entries": graph.adjacency_entry_count(),
            "components": components,
            "weighted": graph.is_weighted(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Adjacency entries: {}", graph.adjacency_entry_count());
        println!("Components: {}", components);
        println!("Weighted: {}", graph.is_weighted());
    }
    Ok(())
}

/// Add a node holding `name`.
pub fn cmd_add_node(path: &Path, name: &str, json: bool) -> GraphResult<()> {
    let mut graph = load(path)?;
    if graph.has_node(&name.to_string()) {
        log::warn!(
            "a node named {:?} already exists; by-name commands reach the first one",
            name
        );
    }
    graph.add_node(name.to_string());
    save(&graph, path)?;

    if json {
        print_json(&serde_json::json!({ "added": name, "nodes": graph.node_count() }));
    } else {
        println!("Added node {:?} ({} nodes)", name, graph.node_count());
    }
    Ok(())
}

/// Add an edge between two named nodes.
pub fn cmd_add_edge(
    path: &Path,
    from: &str,
    to: &str,
    weight: i64,
    oriented: bool,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    let (a, b) = (lookup(&graph, from)?, lookup(&graph, to)?);
    if oriented {
        graph.add_edge_oriented(a, b, weight)?;
    } else {
        graph.add_edge(a, b, weight)?;
    }
    save(&graph, path)?;

    let arrow = if oriented { "->" } else { "--" };
    if json {
        print_json(&serde_json::json!({
            "from": from,
            "to": to,
            "weight": weight,
            "oriented": oriented,
        }));
    } else {
        println!("Linked {} {} {} (weight {})", from, arrow, to, weight);
    }
    Ok(())
}

/// Remove the first node named `name` and every edge touching it.
pub fn cmd_remove_node(path: &Path, name: &str) -> GraphResult<()> {
    let mut graph = load(path)?;
    let id = lookup(&graph, name)?;
    graph.remove_node(id)?;
    save(&graph, path)?;
    println!("Removed node {:?} ({} nodes left)", name, graph.node_count());
    Ok(())
}

/// Remove an edge between two named nodes.
pub fn cmd_remove_edge(path: &Path, from: &str, to: &str, oriented: bool) -> GraphResult<()> {
    let mut graph = load(path)?;
    let (a, b) = (lookup(&graph, from)?, lookup(&graph, to)?);
    if oriented {
        graph.remove_edge_oriented(a, b)?;
    } else {
        graph.remove_edge(a, b)?;
    }
    save(&graph, path)?;
    let arrow = if oriented { "->" } else { "--" };
    println!("Removed edge {} {} {}", from, arrow, to);
    Ok(())
}

/// Change the weight of an edge between two named nodes.
pub fn cmd_set_weight(
    path: &Path,
    from: &str,
    to: &str,
    weight: i64,
    oriented: bool,
) -> GraphResult<()> {
    let mut graph = load(path)?;
    let (a, b) = (lookup(&graph, from)?, lookup(&graph, to)?);
    if oriented {
        graph.set_edge_oriented_weight(a, b, weight)?;
    } else {
        graph.set_edge_weight(a, b, weight)?;
    }
    save(&graph, path)?;
    println!("Set weight of {} / {} to {}", from, to, weight);
    Ok(())
}

/// List the neighbors of a named node.
pub fn cmd_neighbors(path: &Path, name: &str, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let id = lookup(&graph, name)?;
    let neighbors = names(&graph, &graph.neighbors(id)?);

    if json {
        print_json(&serde_json::json!({ "node": name, "neighbors": neighbors }));
    } else {
        println!("{} has {} neighbor(s)", name, neighbors.len());
        for neighbor in neighbors {
            println!("  {}", neighbor);
        }
    }
    Ok(())
}

/// List connected components.
pub fn cmd_components(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let components: Vec<Vec<String>> = connected_components(&graph)
        .iter()
        .map(|ids| names(&graph, ids))
        .collect();

    if json {
        print_json(&serde_json::json!({ "components": components }));
    } else {
        println!("{} component(s)", components.len());
        for (i, members) in components.iter().enumerate() {
            println!("  [{}] {}", i, members.join(", "));
        }
    }
    Ok(())
}

/// Find a path between two named nodes: cheapest if weighted, fewest hops otherwise.
pub fn cmd_path(path: &Path, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let (a, b) = (lookup(&graph, from)?, lookup(&graph, to)?);

    let found = if graph.is_weighted() {
        shortest_path(&graph, a, b)?.map(|(cost, ids)| (Some(cost), ids))
    } else {
        hop_path(&graph, a, b)?.map(|ids| (None, ids))
    };

    match found {
        Some((cost, ids)) => {
            let route = names(&graph, &ids);
            if json {
                print_json(&serde_json::json!({ "path": route, "cost": cost }));
            } else {
                match cost {
                    Some(cost) => println!("{} (cost {})", route.join(" -> "), cost),
                    None => println!("{} ({} hops)", route.join(" -> "), route.len() - 1),
                }
            }
        }
        None => {
            if json {
                print_json(&serde_json::json!({ "path": null }));
            } else {
                println!("No path from {} to {}", from, to);
            }
        }
    }
    Ok(())
}
