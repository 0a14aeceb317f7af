//! Common utilities shared by the search algorithms

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyListGraph, Edge, Node, Path};
use std::collections::HashMap;

/// Validate that both endpoints are in range for `graph`.
pub(crate) fn check_endpoints(
    graph: &AdjacencyListGraph,
    start: Node,
    end: Node,
) -> Result<()> {
    for node in [start, end] {
        if node.id >= graph.size() {
            return Err(GraphError::out_of_range(node.id, graph.size()));
        }
    }
    Ok(())
}

/// Reconstruct the path from `start` to `end` by following predecessor
/// edges back from `end` and reversing.
///
/// `predecessors` maps a node id to the edge used to reach it; every
/// node on the path except `start` must have an entry.
pub(crate) fn reconstruct_path(
    start: Node,
    end: Node,
    predecessors: &HashMap<usize, Edge>,
) -> Path {
    let mut path = Vec::new();
    let mut current = end;

    while current != start {
        if let Some(edge) = predecessors.get(&current.id) {
            path.push(*edge);
            current = edge.from;
        } else {
            break;
        }
    }

    path.reverse();
    path
}
