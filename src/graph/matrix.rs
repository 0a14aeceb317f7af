use crate::error::{GraphError, Result};
use crate::graph::types::{distinct_node_count, Edge, Node};

/// Dense adjacency-matrix graph.
///
/// Stores edge weights in a flattened row-major `size × size` table
/// indexed `from.id * size + to.id`. Cells are `Option<i64>` so that an
/// absent edge is distinguishable from a legal weight of `0`. There is
/// no traversal API; this type exists for O(1) weight lookup by
/// coordinate.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    size: usize,
    cells: Vec<Option<i64>>,
}

impl AdjacencyMatrixGraph {
    /// Create a graph of `size` nodes with no edges.
    pub fn new(size: usize) -> Self {
        AdjacencyMatrixGraph {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create a graph from an edge collection.
    ///
    /// The size is derived as the number of distinct node ids across
    /// `edges`; ids are expected to be dense in `[0, size)`. Edges are
    /// inserted in the order given.
    pub fn from_edges(edges: &[Edge]) -> Result<Self> {
        let mut graph = AdjacencyMatrixGraph::new(distinct_node_count(edges));
        for edge in edges {
            graph.add_edge(*edge)?;
        }
        Ok(graph)
    }

    /// Number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Store `edge.weight` at `[from][to]`, overwriting any previous
    /// weight for that coordinate.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.check_node(edge.from)?;
        self.check_node(edge.to)?;
        self.cells[edge.from.id * self.size + edge.to.id] = Some(edge.weight);
        Ok(())
    }

    /// Weight of the edge from `from` to `to`, or `None` when no edge
    /// has been inserted at that coordinate.
    pub fn weight(&self, from: Node, to: Node) -> Result<Option<i64>> {
        self.check_node(from)?;
        self.check_node(to)?;
        Ok(self.cells[from.id * self.size + to.id])
    }

    fn check_node(&self, node: Node) -> Result<()> {
        if node.id >= self.size {
            return Err(GraphError::out_of_range(node.id, self.size));
        }
        Ok(())
    }
}
