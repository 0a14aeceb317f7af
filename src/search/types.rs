use crate::graph::{Edge, Node, Path};
use serde::Serialize;

/// Result of a path search between two nodes.
///
/// `found` distinguishes the two cases that both carry zero edges: an
/// unreachable destination (`found: false`, everything empty) and the
/// trivial zero-edge path when `start == end` (`found: true`, `nodes`
/// holds just the start node).
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub start: Node,
    pub end: Node,
    pub found: bool,
    /// Nodes along the path: `start`, then each edge's `to`.
    pub nodes: Vec<Node>,
    /// Edges along the path; consecutive edges are contiguous.
    pub edges: Path,
    /// Number of edges in the path.
    pub path_length: usize,
    /// Sum of edge weights along the path.
    pub total_weight: i64,
}

impl PathResult {
    /// Build a successful result from the edges of a reconstructed path.
    pub(crate) fn found(start: Node, end: Node, edges: Path) -> Self {
        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(start);
        nodes.extend(edges.iter().map(|edge| edge.to));
        let total_weight = edges.iter().map(|edge| edge.weight).sum();
        PathResult {
            start,
            end,
            found: true,
            path_length: edges.len(),
            total_weight,
            nodes,
            edges,
        }
    }

    /// Build the result reporting that `end` is unreachable from `start`.
    pub(crate) fn not_found(start: Node, end: Node) -> Self {
        PathResult {
            start,
            end,
            found: false,
            nodes: Vec::new(),
            edges: Vec::new(),
            path_length: 0,
            total_weight: 0,
        }
    }
}
