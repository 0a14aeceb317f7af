use crate::error::{GraphError, Result};
use crate::graph::types::{distinct_node_count, Edge, Node};

/// Sparse adjacency-list graph.
///
/// Stores, for each node id, its outgoing edges in insertion order.
/// Invariant: every edge stored under index `i` has `from.id == i`.
/// This is the representation the search algorithms traverse.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph {
    size: usize,
    outgoing: Vec<Vec<Edge>>,
}

impl AdjacencyListGraph {
    /// Create a graph of `size` nodes with no edges.
    pub fn new(size: usize) -> Self {
        AdjacencyListGraph {
            size,
            outgoing: vec![Vec::new(); size],
        }
    }

    /// Create a graph from an edge collection.
    ///
    /// The size is derived as the number of distinct node ids across
    /// `edges`; ids are expected to be dense in `[0, size)`. Edges are
    /// inserted in the order given.
    pub fn from_edges(edges: &[Edge]) -> Result<Self> {
        let mut graph = AdjacencyListGraph::new(distinct_node_count(edges));
        for edge in edges {
            graph.add_edge(*edge)?;
        }
        Ok(graph)
    }

    /// Number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    /// Append `edge` to its source node's outgoing sequence.
    ///
    /// Both endpoints are bounds-checked, so every stored edge targets a
    /// valid node id.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.check_node(edge.from)?;
        self.check_node(edge.to)?;
        self.outgoing[edge.from.id].push(edge);
        Ok(())
    }

    /// Outgoing edges of `node`, in insertion order.
    pub fn edges(&self, node: Node) -> Result<&[Edge]> {
        self.check_node(node)?;
        Ok(&self.outgoing[node.id])
    }

    /// The `to` endpoint of each outgoing edge of `node`, in the same
    /// order as [`edges`](Self::edges). A neighbor reachable via
    /// multiple edges appears once per edge.
    pub fn neighbors(&self, node: Node) -> Result<Vec<Node>> {
        let edges = self.edges(node)?;
        Ok(edges.iter().map(|edge| edge.to).collect())
    }

    fn check_node(&self, node: Node) -> Result<()> {
        if node.id >= self.size {
            return Err(GraphError::out_of_range(node.id, self.size));
        }
        Ok(())
    }
}
