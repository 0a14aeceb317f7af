use crate::error::Result;
use crate::graph::{AdjacencyListGraph, Edge, Node};
use crate::search::shared::{check_endpoints, reconstruct_path};
use crate::search::types::PathResult;
use crate::trace_time;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Find a path from `start` to `end` using the fewest edges.
///
/// Edge weights are ignored. The frontier is processed first-in
/// first-out, so the first time `end` is discovered the path to it uses
/// the minimum number of edges. Among equal-length paths, the one
/// discovered first in edge-insertion order wins.
///
/// Returns `PathResult { found: false, .. }` when `end` is unreachable,
/// and the trivial zero-edge path when `start == end`.
#[tracing::instrument(skip(graph), fields(start = start.id, end = end.id, size = graph.size()))]
pub fn bfs(graph: &AdjacencyListGraph, start: Node, end: Node) -> Result<PathResult> {
    check_endpoints(graph, start, end)?;

    if start == end {
        return Ok(PathResult::found(start, end, Vec::new()));
    }

    let search_start = Instant::now();
    let mut visited = vec![false; graph.size()];
    let mut predecessors: HashMap<usize, Edge> = HashMap::new();
    let mut frontier: VecDeque<Node> = VecDeque::new();

    visited[start.id] = true;
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        for edge in graph.edges(current)? {
            if visited[edge.to.id] {
                continue;
            }
            visited[edge.to.id] = true;
            predecessors.insert(edge.to.id, *edge);

            if edge.to == end {
                let path = reconstruct_path(start, end, &predecessors);
                trace_time!(search_start, "bfs_found", path_length = path.len());
                return Ok(PathResult::found(start, end, path));
            }
            frontier.push_back(edge.to);
        }
    }

    trace_time!(search_start, "bfs_exhausted");
    Ok(PathResult::not_found(start, end))
}
