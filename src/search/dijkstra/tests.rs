use super::HeapEntry;
use crate::error::GraphError;
use crate::graph::{AdjacencyListGraph, Edge, Node};
use crate::search::dijkstra::shortest_path;

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node: Node::new(0),
        cost: 1,
    };
    let entry2 = HeapEntry {
        node: Node::new(1),
        cost: 2,
    };
    let entry3 = HeapEntry {
        node: Node::new(2),
        cost: 1,
    };

    // Lower cost should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal costs fall back to node id
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);
}

/// Test that the lightest route wins over routes with fewer edges
#[test]
fn test_shortest_path_prefers_total_weight() {
    // Heavy direct edge vs a light detour
    let graph = AdjacencyListGraph::from_edges(&[
        Edge::new(0, 2, 10),
        Edge::new(0, 1, 1),
        Edge::new(1, 2, 2),
    ])
    .unwrap();

    let result = shortest_path(&graph, Node::new(0), Node::new(2)).unwrap();
    assert_eq!(result.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
    assert_eq!(result.total_weight, 3);
}

/// Test the weighted route choice through the diamond graph
#[test]
fn test_shortest_path_routes_around_heavy_edge() {
    let graph = AdjacencyListGraph::from_edges(&[
        Edge::new(0, 1, 5),
        Edge::new(0, 2, 1),
        Edge::new(1, 3, 1),
        Edge::new(2, 3, 1),
        Edge::new(3, 4, 1),
    ])
    .unwrap();

    let result = shortest_path(&graph, Node::new(0), Node::new(4)).unwrap();
    assert_eq!(
        result.edges,
        vec![Edge::new(0, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 4, 1)]
    );
    assert_eq!(result.total_weight, 3);
    assert_eq!(
        result.nodes,
        vec![Node::new(0), Node::new(2), Node::new(3), Node::new(4)]
    );
}

/// Test that a cheaper route found later displaces a tentative one
#[test]
fn test_shortest_path_relaxes_tentative_distance() {
    // 0 -> 1 -> 2 is tentatively 4 + 1; 0 -> 3 -> 1 lowers 1 to 2
    let graph = AdjacencyListGraph::from_edges(&[
        Edge::new(0, 1, 4),
        Edge::new(0, 3, 1),
        Edge::new(3, 1, 1),
        Edge::new(1, 2, 1),
    ])
    .unwrap();

    let result = shortest_path(&graph, Node::new(0), Node::new(2)).unwrap();
    assert_eq!(
        result.edges,
        vec![Edge::new(0, 3, 1), Edge::new(3, 1, 1), Edge::new(1, 2, 1)]
    );
    assert_eq!(result.total_weight, 3);
}

/// Test that equal-weight ties keep the first discovered minimum
#[test]
fn test_shortest_path_tie_keeps_first_discovered() {
    // Both routes to 3 cost 2; the route through 1 is relaxed first
    let graph = AdjacencyListGraph::from_edges(&[
        Edge::new(0, 1, 1),
        Edge::new(0, 2, 1),
        Edge::new(1, 3, 1),
        Edge::new(2, 3, 1),
    ])
    .unwrap();

    let result = shortest_path(&graph, Node::new(0), Node::new(3)).unwrap();
    assert_eq!(result.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 3, 1)]);
}

/// Test that zero-weight edges are legal
#[test]
fn test_shortest_path_zero_weights() {
    let graph = AdjacencyListGraph::from_edges(&[
        Edge::new(0, 1, 0),
        Edge::new(1, 2, 0),
    ])
    .unwrap();

    let result = shortest_path(&graph, Node::new(0), Node::new(2)).unwrap();
    assert!(result.found);
    assert_eq!(result.total_weight, 0);
    assert_eq!(result.path_length, 2);
}

/// Test that any negative weight fails the search up front
#[test]
fn test_shortest_path_rejects_negative_weight() {
    let graph = AdjacencyListGraph::from_edges(&[
        Edge::new(0, 1, 2),
        Edge::new(1, 2, -3),
    ])
    .unwrap();

    let err = shortest_path(&graph, Node::new(0), Node::new(1)).unwrap_err();
    assert_eq!(err, GraphError::negative_weight(1, 2, -3));
}

/// Test that a negative weight is rejected even when unreachable
#[test]
fn test_shortest_path_rejects_unreachable_negative_weight() {
    let mut graph = AdjacencyListGraph::new(4);
    graph.add_edge(Edge::new(0, 1, 1)).unwrap();
    graph.add_edge(Edge::new(2, 3, -1)).unwrap();

    let err = shortest_path(&graph, Node::new(0), Node::new(1)).unwrap_err();
    assert_eq!(err, GraphError::negative_weight(2, 3, -1));
}

/// Test that an unreachable destination is reported, not an error
#[test]
fn test_shortest_path_unreachable() {
    let mut graph = AdjacencyListGraph::new(6);
    graph.add_edge(Edge::new(0, 1, 1)).unwrap();

    let result = shortest_path(&graph, Node::new(0), Node::new(5)).unwrap();
    assert!(!result.found);
    assert!(result.edges.is_empty());
}

/// Test the start == end boundary case
#[test]
fn test_shortest_path_start_equals_end() {
    let graph = AdjacencyListGraph::from_edges(&[Edge::new(0, 1, 1)]).unwrap();
    let result = shortest_path(&graph, Node::new(0), Node::new(0)).unwrap();

    assert!(result.found);
    assert!(result.edges.is_empty());
    assert_eq!(result.total_weight, 0);
}

/// Test endpoint validation
#[test]
fn test_shortest_path_out_of_range_endpoints() {
    let graph = AdjacencyListGraph::new(2);
    assert!(shortest_path(&graph, Node::new(0), Node::new(2)).is_err());
}
