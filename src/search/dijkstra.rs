use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyListGraph, Edge, Node};
use crate::search::shared::{check_endpoints, reconstruct_path};
use crate::search::types::PathResult;
use crate::trace_time;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated
/// cost, then node id so extraction order is deterministic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: Node,
    pub cost: i64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node.id.cmp(&other.node.id))
    }
}

/// Find the minimum total-weight path from `start` to `end` (Dijkstra).
///
/// All edge weights must be non-negative: the graph is scanned before
/// the search and the first negative edge fails with
/// [`GraphError::NegativeWeight`], whether or not a search from `start`
/// would reach it. When two paths tie on total weight, the predecessor
/// chain established first (the first discovered minimum) is kept.
///
/// Returns `PathResult { found: false, .. }` when `end` is unreachable,
/// and the trivial zero-edge path when `start == end`.
#[tracing::instrument(skip(graph), fields(start = start.id, end = end.id, size = graph.size()))]
pub fn shortest_path(
    graph: &AdjacencyListGraph,
    start: Node,
    end: Node,
) -> Result<PathResult> {
    check_endpoints(graph, start, end)?;
    check_weights(graph)?;

    if start == end {
        return Ok(PathResult::found(start, end, Vec::new()));
    }

    let search_start = Instant::now();
    let mut best: Vec<Option<i64>> = vec![None; graph.size()];
    let mut finalized = vec![false; graph.size()];
    let mut predecessors: HashMap<usize, Edge> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    best[start.id] = Some(0);
    heap.push(Reverse(HeapEntry {
        node: start,
        cost: 0,
    }));

    while let Some(Reverse(HeapEntry { node: current, cost })) = heap.pop() {
        // Lazy deletion: stale entries for already-finalized nodes
        if finalized[current.id] {
            continue;
        }
        finalized[current.id] = true;

        if current == end {
            let path = reconstruct_path(start, end, &predecessors);
            trace_time!(search_start, "dijkstra_found", total_weight = cost);
            return Ok(PathResult::found(start, end, path));
        }

        for edge in graph.edges(current)? {
            let candidate = cost + edge.weight;
            let improved = match best[edge.to.id] {
                Some(known) => candidate < known,
                None => true,
            };
            if improved {
                best[edge.to.id] = Some(candidate);
                predecessors.insert(edge.to.id, *edge);
                heap.push(Reverse(HeapEntry {
                    node: edge.to,
                    cost: candidate,
                }));
            }
        }
    }

    trace_time!(search_start, "dijkstra_exhausted");
    Ok(PathResult::not_found(start, end))
}

/// Reject any negative edge weight in `graph`.
fn check_weights(graph: &AdjacencyListGraph) -> Result<()> {
    for id in 0..graph.size() {
        for edge in graph.edges(Node::new(id))? {
            if edge.weight < 0 {
                return Err(GraphError::negative_weight(
                    edge.from.id,
                    edge.to.id,
                    edge.weight,
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
