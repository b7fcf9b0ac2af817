//! Core container tests: construction, edge insertion, lookup, copy and move.

use adjgraph::{ErrorKind, Graph, GraphBuilder, GraphError, NodeId};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Nodes A, B, C with no edges.
fn abc() -> (Graph<&'static str>, NodeId, NodeId, NodeId) {
    let mut graph = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    (graph, a, b, c)
}

// ==================== Construction ====================

#[test]
fn test_new_graph_is_empty() {
    let graph: Graph<&str> = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.adjacency_entry_count(), 0);
    graph.check_invariants().unwrap();
}

#[test]
fn test_add_node_keeps_adjacency_aligned() {
    init_logger();
    let mut graph: Graph<u32> = Graph::new();
    for i in 0..10 {
        let id = graph.add_node(i);
        graph.check_invariants().unwrap();
        assert_eq!(graph.edge_count_of_node(id).unwrap(), 0);
        assert_eq!(graph.index_of(id).unwrap(), i as usize);
    }
    assert_eq!(graph.node_count(), 10);
}

#[test]
fn test_with_nodes_clones_value() {
    let graph: Graph<i32> = Graph::with_nodes(3, 7);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.all_nodes_with_value(&7).len(), 3);
    graph.check_invariants().unwrap();
}

#[test]
fn test_from_values_keeps_order() {
    let graph: Graph<&str> = Graph::from_values(["a", "b", "c"]);
    let payloads: Vec<&str> = graph.nodes().iter().map(|n| *n.data()).collect();
    assert_eq!(payloads, vec!["a", "b", "c"]);

    let collected: Graph<&str> = ["x", "y"].into_iter().collect();
    assert_eq!(collected.node_count(), 2);
    assert_eq!(collected.index_of(&"y").unwrap(), 1);
}

#[test]
fn test_builder_links_by_position() {
    let mut builder: GraphBuilder<&str> = GraphBuilder::new();
    let x1 = builder.add_node("x");
    let x2 = builder.add_node("x");
    let y = builder.add_node("y");
    builder.link(x2, y, 4).link_oriented(y, x1, 2);
    let graph = builder.build().unwrap();

    let ids: Vec<NodeId> = graph.node_ids().collect();
    assert_eq!(graph.edge_count_of_node(ids[0]).unwrap(), 0);
    assert_eq!(graph.edge_weight(ids[1], ids[2]).unwrap(), 4);
    assert!(graph.has_edge_oriented(ids[2], ids[0], Some(2)).unwrap());
    graph.check_invariants().unwrap();
}

#[test]
fn test_builder_rejects_unknown_position() {
    let mut builder: GraphBuilder<&str> = GraphBuilder::new();
    builder.add_node("only");
    builder.link(0, 5, 1);
    let err = builder.build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);
}

// ==================== Edge insertion ====================

#[test]
fn test_undirected_edge_is_mirrored() {
    init_logger();
    let (mut graph, a, b, _) = abc();
    graph.add_edge(a, b, 5).unwrap();

    assert!(graph.has_edge_oriented(a, b, Some(5)).unwrap());
    assert!(graph.has_edge_oriented(b, a, Some(5)).unwrap());
    assert!(graph.has_edge(a, b, Some(5)).unwrap());
    assert_eq!(graph.edge_weight(a, b).unwrap(), 5);
    assert_eq!(graph.edge_weight(b, a).unwrap(), 5);
    assert_eq!(graph.neighbors(a).unwrap(), vec![b]);
    assert_eq!(graph.neighbors(b).unwrap(), vec![a]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.adjacency_entry_count(), 2);
    graph.check_invariants().unwrap();
}

#[test]
fn test_self_loop_stored_once() {
    let (mut graph, a, _, _) = abc();
    graph.add_edge(a, a, 3).unwrap();

    assert_eq!(graph.edge_count_of_node(a).unwrap(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node(a).unwrap().degree(), 1);
    assert_eq!(graph.edge_weight(a, a).unwrap(), 3);
    graph.check_invariants().unwrap();
}

#[test]
fn test_oriented_edge_one_direction() {
    let (mut graph, a, b, _) = abc();
    graph.add_edge_oriented(a, b, 4).unwrap();

    assert!(graph.has_edge_oriented(a, b, Some(4)).unwrap());
    assert!(!graph.has_edge_oriented(b, a, Some(4)).unwrap());
    assert!(!graph.has_edge(a, b, None).unwrap());
    assert!(graph.neighbors(b).unwrap().is_empty());
    assert_eq!(graph.neighbors(a).unwrap(), vec![b]);

    graph.add_edge_oriented(b, a, 4).unwrap();
    assert!(graph.has_edge(a, b, Some(4)).unwrap());
    assert_eq!(graph.edge_count(), 2);
    graph.check_invariants().unwrap();
}

#[test]
fn test_has_edge_weight_filter() {
    let (mut graph, a, b, _) = abc();
    graph.add_edge(a, b, 5).unwrap();

    assert!(graph.has_edge_oriented(a, b, None).unwrap());
    assert!(!graph.has_edge_oriented(a, b, Some(6)).unwrap());
    assert!(!graph.has_edge(a, b, Some(6)).unwrap());
}

#[test]
fn test_degree_matches_adjacency() {
    let (mut graph, a, b, c) = abc();
    graph.add_edge(a, b, 1).unwrap();
    graph.add_edge(a, c, 1).unwrap();
    graph.add_edge_oriented(a, a, 1).unwrap();

    for id in [a, b, c] {
        assert_eq!(
            graph.node(id).unwrap().degree(),
            graph.edge_count_of_node(id).unwrap()
        );
    }
    assert_eq!(graph.edge_count_of_node(a).unwrap(), 3);
}

// ==================== Lookup ====================

#[test]
fn test_find_edge_scenario() {
    let (mut graph, a, b, c) = abc();
    graph.add_edge(a, b, 5).unwrap();
    graph.add_edge(b, c, 3).unwrap();
    assert_eq!(graph.edge_count(), 2);

    let found = graph.find_edge(a, b, 0, false).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].weight(), 5);
    assert_eq!(found[0].target(), b);
    assert_eq!(found[1].target(), a);

    graph.remove_node(b).unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node_count(), 2);
    graph.check_invariants().unwrap();
}

#[test]
fn test_find_edge_compare_weight() {
    let (mut graph, a, b, _) = abc();
    graph.add_edge(a, b, 1).unwrap();
    graph.add_edge(a, b, 2).unwrap();

    let exact = graph.find_edge_oriented(a, b, 2, true).unwrap().unwrap();
    assert_eq!(exact.weight(), 2);

    let first = graph.find_edge_oriented(a, b, 99, false).unwrap().unwrap();
    assert_eq!(first.weight(), 1);

    assert!(graph.find_edge_oriented(a, b, 99, true).unwrap().is_none());
    assert!(graph.find_edge(a, b, 99, true).unwrap().is_empty());
}

#[test]
fn test_find_edge_self_loop_yields_one() {
    let (mut graph, a, _, _) = abc();
    graph.add_edge(a, a, 8).unwrap();
    let found = graph.find_edge(a, a, 8, true).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn test_duplicate_values_resolve_to_first_match() {
    init_logger();
    let mut graph: Graph<&str> = Graph::new();
    let x1 = graph.add_node("x");
    let x2 = graph.add_node("x");
    let y = graph.add_node("y");

    assert_eq!(graph.find_node(&"x"), Some(x1));
    assert_eq!(graph.index_of(&"x").unwrap(), 0);
    assert_eq!(graph.all_nodes_with_value(&"x"), vec![x1, x2]);

    graph.add_edge(&"x", y, 1).unwrap();
    assert_eq!(graph.edge_count_of_node(x1).unwrap(), 1);
    assert_eq!(graph.edge_count_of_node(x2).unwrap(), 0);

    // A handle always reaches its own node.
    graph.add_edge(x2, &"y", 2).unwrap();
    assert_eq!(graph.edge_count_of_node(x2).unwrap(), 1);
    assert_eq!(graph.edge_count_of_node(y).unwrap(), 2);
}

#[test]
fn test_node_equality_is_payload_equality() {
    let mut graph: Graph<&str> = Graph::new();
    let x1 = graph.add_node("x");
    let x2 = graph.add_node("x");
    let y = graph.add_node("y");

    assert_ne!(x1, x2);
    assert!(graph.node(x1).unwrap() == graph.node(x2).unwrap());
    assert!(graph.node(x1).unwrap() != graph.node(y).unwrap());
}

#[test]
fn test_edges_equal_fails_closed_on_expired_target() {
    let mut graph: Graph<&str> = Graph::new();
    let x1 = graph.add_node("x");
    let x2 = graph.add_node("x");
    let y = graph.add_node("y");
    graph.add_edge_oriented(y, x1, 5).unwrap();
    graph.add_edge_oriented(y, x2, 5).unwrap();
    graph.add_edge_oriented(y, x2, 6).unwrap();

    let edges = graph.edges_of(y).unwrap();
    let (first, second, heavier) = (edges[0], edges[1], edges[2]);
    assert!(graph.edges_equal(&first, &second));
    assert!(!graph.edges_equal(&second, &heavier));

    graph.remove_node(x1).unwrap();
    assert!(graph.edge_target(&first).is_none());
    assert!(!graph.edges_equal(&first, &second));
    assert!(!graph.edges_equal(&first, &first));
    assert_eq!(graph.edge_target(&second).unwrap().data(), &"x");
}

#[test]
fn test_node_data_accessors() {
    let (mut graph, a, _, _) = abc();
    assert_eq!(graph.node_data(a).unwrap(), &"A");

    let old = graph.set_node_data(a, "Z").unwrap();
    assert_eq!(old, "A");
    assert_eq!(graph.node_data(&"Z").unwrap(), &"Z");
    assert!(!graph.has_node(&"A"));

    *graph.node_data_mut(a).unwrap() = "Q";
    assert_eq!(graph.node(a).unwrap().data(), &"Q");
}

#[test]
fn test_is_weighted() {
    let (mut graph, a, b, c) = abc();
    graph.add_edge(a, b, 0).unwrap();
    graph.add_edge(b, c, 0).unwrap();
    assert!(!graph.is_weighted());

    graph.set_edge_weight(b, c, 3).unwrap();
    assert!(graph.is_weighted());
}

// ==================== Null and missing nodes ====================

#[test]
fn test_missing_handle_fails_with_node_is_null() {
    let (mut graph, a, _, _) = abc();
    let missing = graph.find_node(&"nope");
    assert!(missing.is_none());

    let err = graph.add_edge(missing, a, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NodeIsNull);
    assert_eq!(
        graph.add_edge_oriented(a, missing, 1).unwrap_err().kind(),
        ErrorKind::NodeIsNull
    );
    assert_eq!(graph.remove_node(missing).unwrap_err().kind(), ErrorKind::NodeIsNull);
    assert_eq!(graph.neighbors(missing).unwrap_err().kind(), ErrorKind::NodeIsNull);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_unknown_value_fails_with_node_not_found() {
    let (mut graph, a, b, _) = abc();
    graph.add_edge(a, b, 1).unwrap();

    let err = graph.add_edge(&"nope", a, 1).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound(_)));
    assert_eq!(err.to_string(), "Node not found: value \"nope\"");
    assert_eq!(
        graph.remove_node(&"nope").unwrap_err().kind(),
        ErrorKind::NodeNotFound
    );
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_expired_handle_is_absent() {
    let (mut graph, a, b, _) = abc();
    graph.remove_node(a).unwrap();

    assert!(!graph.contains(a));
    assert!(graph.node(a).is_none());
    assert_eq!(
        graph.add_edge(a, b, 1).unwrap_err().kind(),
        ErrorKind::NodeNotFound
    );

    let d = graph.add_node("D");
    assert_ne!(d, a);
    assert_eq!(graph.index_of(d).unwrap(), 2);
}

// ==================== Copy and move ====================

#[test]
fn test_deep_copy_is_independent() {
    let (mut graph, a, b, c) = abc();
    graph.add_edge(a, b, 1).unwrap();
    graph.add_edge(b, c, 2).unwrap();
    graph.add_edge_oriented(c, a, 3).unwrap();

    let mut copy = graph.clone();
    copy.check_invariants().unwrap();
    assert_eq!(copy.edge_count(), 3);
    assert_eq!(copy.neighbors(b).unwrap(), graph.neighbors(b).unwrap());

    copy.add_node("D");
    copy.remove_edge(a, b).unwrap();
    copy.set_edge_weight(b, c, 9).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.edge_weight(b, c).unwrap(), 2);
    assert_eq!(graph.neighbors(a).unwrap(), vec![b]);
    assert_eq!(copy.node_count(), 4);
    assert_eq!(copy.edge_count(), 2);
    graph.check_invariants().unwrap();
}

#[test]
fn test_take_leaves_source_empty() {
    let (mut graph, a, b, _) = abc();
    graph.add_edge(a, b, 1).unwrap();

    let moved = graph.take();
    assert_eq!(moved.node_count(), 3);
    assert_eq!(moved.edge_count(), 1);
    assert!(moved.has_edge(a, b, Some(1)).unwrap());

    assert!(graph.is_empty());
    assert_eq!(graph.adjacency_entry_count(), 0);
    graph.check_invariants().unwrap();
}

// ==================== Errors ====================

#[test]
fn test_error_kind_and_message() {
    let err = GraphError::CycleDetected("a -> b -> a".to_string());
    assert_eq!(err.kind(), ErrorKind::CycleDetected);
    assert_eq!(err.to_string(), "Cycle detected: a -> b -> a");

    let err = GraphError::WeightedGraph("hop count".to_string());
    assert_eq!(err.kind(), ErrorKind::WeightedGraph);
    assert_eq!(err.to_string(), "Graph must not have weights: hop count");
}
