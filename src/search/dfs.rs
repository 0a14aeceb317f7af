use crate::error::Result;
use crate::graph::{AdjacencyListGraph, Edge, Node};
use crate::search::shared::{check_endpoints, reconstruct_path};
use crate::search::types::PathResult;
use crate::trace_time;
use std::collections::HashMap;
use std::time::Instant;

/// Find some path from `start` to `end`, exploring one branch fully
/// before backtracking.
///
/// No optimality guarantee: the returned path is valid and connected
/// but not necessarily shortest. Outgoing edges are pushed onto the
/// stack in reverse insertion order, so the branch behind a node's
/// earliest-inserted edge is explored first.
///
/// Returns `PathResult { found: false, .. }` when `end` is unreachable,
/// and the trivial zero-edge path when `start == end`.
#[tracing::instrument(skip(graph), fields(start = start.id, end = end.id, size = graph.size()))]
pub fn dfs(graph: &AdjacencyListGraph, start: Node, end: Node) -> Result<PathResult> {
    check_endpoints(graph, start, end)?;

    if start == end {
        return Ok(PathResult::found(start, end, Vec::new()));
    }

    let search_start = Instant::now();
    let mut visited = vec![false; graph.size()];
    let mut predecessors: HashMap<usize, Edge> = HashMap::new();
    // Each frame carries the edge used to reach the node; the
    // predecessor is recorded when the node is first popped unvisited.
    let mut stack: Vec<(Node, Option<Edge>)> = vec![(start, None)];

    while let Some((current, via)) = stack.pop() {
        if visited[current.id] {
            continue;
        }
        visited[current.id] = true;
        if let Some(edge) = via {
            predecessors.insert(current.id, edge);
        }

        if current == end {
            let path = reconstruct_path(start, end, &predecessors);
            trace_time!(search_start, "dfs_found", path_length = path.len());
            return Ok(PathResult::found(start, end, path));
        }

        for edge in graph.edges(current)?.iter().rev() {
            if !visited[edge.to.id] {
                stack.push((edge.to, Some(*edge)));
            }
        }
    }

    trace_time!(search_start, "dfs_exhausted");
    Ok(PathResult::not_found(start, end))
}
